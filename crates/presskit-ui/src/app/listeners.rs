//! Click handlers for language buttons and carousel controls.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;

use super::BrowserSite;

/// Attach every handler; listeners live as long as the page.
pub(super) fn wire(site: &Rc<RefCell<BrowserSite>>) {
    let (buttons, controls) = {
        let current = site.borrow();
        (current.language_buttons(), current.carousel_controls())
    };

    for (button, code) in buttons {
        let site = Rc::clone(site);
        EventListener::new(&button, "click", move |_| {
            site.borrow_mut().set_language_code(&code);
        })
        .forget();
    }

    for (index, (prev, next)) in controls.into_iter().enumerate() {
        let back = Rc::clone(site);
        EventListener::new(&prev, "click", move |_| back.borrow_mut().carousel_prev(index))
            .forget();
        let forward = Rc::clone(site);
        EventListener::new(&next, "click", move |_| {
            forward.borrow_mut().carousel_next(index);
        })
        .forget();
    }
    tracing::debug!("click handlers attached");
}

pub use crate::{
    Signal,
    config::SiteConfig,
    form::{QuoteFormController, QuoteFormView, SubmitReport},
    navigation::{LinkTone, MenuState, current_section},
    notify::{
        HIDE_TRANSITION_TIMEOUT, TOAST_DISMISS_AFTER, Toast, ToastKind, ToastSurface, Toaster,
        Timers,
    },
    quote::{Field, FieldError, QuoteDraft, QuoteLimits, QuoteRequest, ValidationErrors},
    submit::{QuoteEndpoint, SubmitError, interpret_response},
};

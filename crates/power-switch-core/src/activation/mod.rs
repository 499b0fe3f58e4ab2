mod activation_service;
mod presenter;

pub use {
    activation_service::{Activate, ActivationReceipt, ActivationService},
    presenter::Presenter,
};

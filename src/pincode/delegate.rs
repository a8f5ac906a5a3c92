//! Lifecycle callbacks for the pincode component.

use super::model::Model;

/// Collaborator notified about, and consulted on, editing lifecycle events.
///
/// Every method has a default, so implementors only write the ones they care
/// about. Queries default to `true`, which permits the action; notifications
/// default to doing nothing. Each call receives the field so the delegate can
/// read its value.
///
/// ```rust
/// use bubbletea_pincode::pincode::{self, Model, PinCodeDelegate};
///
/// struct RequireFullCode;
///
/// impl PinCodeDelegate for RequireFullCode {
///     fn should_return(&mut self, field: &Model) -> bool {
///         field.is_filled()
///     }
/// }
///
/// let mut field = pincode::new().with_delegate(RequireFullCode);
/// field.request_focus();
/// field.insert('\n');
/// assert!(field.focused()); // return refused until the code is complete
/// ```
pub trait PinCodeDelegate {
    /// Asked before the field takes focus.
    fn should_begin_editing(&mut self, _field: &Model) -> bool {
        true
    }

    /// Called after the field took focus.
    fn did_begin_editing(&mut self, _field: &Model) {}

    /// Asked when the last slot has been filled. Returning `true` releases focus.
    fn should_end_editing(&mut self, _field: &Model) -> bool {
        true
    }

    /// Called when the field releases focus.
    fn did_end_editing(&mut self, _field: &Model) {}

    /// Asked when a line break is entered. Returning `true` releases focus.
    fn should_return(&mut self, _field: &Model) -> bool {
        true
    }

    /// Called after every accepted change to the text.
    fn value_changed(&mut self, _field: &Model) {}
}

/// Boxed delegate stored by the model. `Send` because bubbletea-rs models are.
pub type BoxedDelegate = Box<dyn PinCodeDelegate + Send>;

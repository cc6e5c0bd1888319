use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::bot::dispatcher::{DispatchOutcome, Dispatcher, DispatcherState};
use crate::command::{
    mock::{counting_command, Behaviour},
    CommandRegistry,
};
use crate::discord::mock::{MockRegistrar, MockResponder};
use crate::interaction::InteractionEvent;
use crate::model::reply::{InteractionReply, HANDLER_ERROR_MESSAGE};

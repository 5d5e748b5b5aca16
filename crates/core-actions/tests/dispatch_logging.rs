mod common;
use common::*;

use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::dispatcher::{Dispatch, with_default};
use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

#[derive(Clone, Default)]
struct MessageCapture {
    events: Arc<Mutex<Vec<(String, String)>>>,
}

#[derive(Default)]
struct MessageField(String);

impl Visit for MessageField {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S> Layer<S> for MessageCapture
where
    S: Subscriber,
{
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::always()
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut message = MessageField::default();
        event.record(&mut message);
        self.events
            .lock()
            .unwrap()
            .push((event.metadata().target().to_string(), message.0));
    }
}

fn captured(run: impl FnOnce()) -> Vec<(String, String)> {
    let capture = MessageCapture::default();
    let events = capture.events.clone();
    let dispatch = Dispatch::new(Registry::default().with(capture));
    with_default(&dispatch, run);
    let out = events.lock().unwrap().clone();
    out
}

fn dispatch_messages(events: &[(String, String)]) -> Vec<&str> {
    events
        .iter()
        .filter(|(target, _)| target == "actions.dispatch")
        .map(|(_, msg)| msg.as_str())
        .collect()
}

#[test]
fn edit_and_refused_quit_are_traced_on_dispatch_target() {
    let events = captured(|| {
        let mut m = model(&["abc"]);
        type_text(&mut m, "x");
        press(&mut m, &[CTRL_Q]);
    });
    let messages = dispatch_messages(&events);
    assert!(messages.contains(&"edit"), "{messages:?}");
    assert!(messages.contains(&"quit_refused"), "{messages:?}");
    assert!(!messages.contains(&"quit"), "{messages:?}");
}

#[test]
fn opening_the_save_prompt_is_traced() {
    let events = captured(|| {
        let mut m = empty_model();
        press(&mut m, &[CTRL_S]);
    });
    assert!(dispatch_messages(&events).contains(&"save_as_prompt_opened"));
}

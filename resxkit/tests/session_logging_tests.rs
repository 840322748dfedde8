use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use resxkit::{ResourceEntry, Session, resx};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    message: Option<String>,
    fields: HashMap<String, String>,
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl EventCapture {
    fn new() -> (Self, Arc<Mutex<Vec<CapturedEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: events.clone(),
            },
            events,
        )
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for EventCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);

        let fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let message = fields.get("message").cloned();

        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message,
            fields,
        });
    }
}

fn with_captured_events<F>(f: F) -> Vec<CapturedEvent>
where
    F: FnOnce(),
{
    let (layer, events) = EventCapture::new();
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    events.lock().unwrap().clone()
}

#[test]
fn test_load_logs_classification() {
    let content = resx::build(&[ResourceEntry::new("A", "1"), ResourceEntry::new("B", "2")]);

    let events = with_captured_events(|| {
        let mut session = Session::new();
        session.load(&content, "Resources.fr-FR.resx").unwrap();
    });

    let loaded = events
        .iter()
        .find(|e| e.message.as_deref() == Some("loaded resource file"))
        .expect("load event");
    assert_eq!(loaded.level, tracing::Level::INFO);
    assert_eq!(loaded.fields["file"], "Resources.fr-FR.resx");
    assert_eq!(loaded.fields["entries"], "2");
    assert_eq!(loaded.fields["base_name"], "Resources");
    assert_eq!(loaded.fields["locale"], "fr-FR");

    assert!(
        events
            .iter()
            .any(|e| e.level == tracing::Level::DEBUG
                && e.message.as_deref() == Some("regrouped files"))
    );
}

#[test]
fn test_failed_load_logs_nothing() {
    let events = with_captured_events(|| {
        let mut session = Session::new();
        assert!(session.load("<root>", "Resources.resx").is_err());
    });
    assert!(events.is_empty(), "unexpected events: {events:?}");
}

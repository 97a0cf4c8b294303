//! View item
//!
//! Pure sink: observes the databases its upstream neighbors advertise so
//! the host can open them for display. Produces nothing and always
//! succeeds.

use std::sync::Arc;

use async_trait::async_trait;

use item_engine::{
    database_urls, ExecutableItem, ExecutionMessage, ItemCategory, ItemContext, ItemDescriptor,
    ItemFactory, ItemMetadata, LogSink, ProjectItemResource, Result,
};

/// The View's type identifier string
pub const ITEM_TYPE: &str = "View";

/// Executable counterpart of the View item
pub struct ViewExecutable {
    name: String,
    logger: Arc<dyn LogSink>,
}

impl ViewExecutable {
    /// Create a new View executable
    pub fn new(name: impl Into<String>, logger: Arc<dyn LogSink>) -> Self {
        Self {
            name: name.into(),
            logger,
        }
    }
}

#[async_trait]
impl ExecutableItem for ViewExecutable {
    fn name(&self) -> &str {
        &self.name
    }

    fn item_type(&self) -> &'static str {
        ITEM_TYPE
    }

    async fn execute_forward(&self, resources: &[ProjectItemResource]) -> bool {
        let urls = database_urls(resources);
        self.logger.send(ExecutionMessage::info(
            &self.name,
            format!("View {} received {} database resource(s)", self.name, urls.len()),
        ));
        true
    }
}

/// Factory wiring Views into the host's item registry
pub struct ViewFactory;

impl ItemDescriptor for ViewFactory {
    fn descriptor() -> ItemMetadata {
        ItemMetadata {
            item_type: ITEM_TYPE.to_string(),
            category: ItemCategory::Visualization,
            label: "View".to_string(),
            description: "Displays data from upstream databases".to_string(),
            icon: ":/icons/item_icons/binoculars.svg".to_string(),
            icon_color: "#33b833".to_string(),
            background_color: "#ebf9eb".to_string(),
        }
    }
}

impl ItemFactory for ViewFactory {
    fn metadata(&self) -> ItemMetadata {
        Self::descriptor()
    }

    fn make_executable(&self, context: &ItemContext) -> Result<Arc<dyn ExecutableItem>> {
        Ok(Arc::new(ViewExecutable::new(
            context.name.clone(),
            context.logger.clone(),
        )))
    }
}

inventory::submit!(item_engine::DescriptorFn(ViewFactory::descriptor));

#[cfg(test)]
mod tests {
    use super::*;
    use item_engine::{MessageKind, NullLogSink, VecLogSink};

    #[tokio::test]
    async fn test_forward_reports_database_count() {
        let sink = Arc::new(VecLogSink::new());
        let view = ViewExecutable::new("View 1", sink.clone());

        let resources = vec![
            ProjectItemResource::database("sqlite:///a.sqlite", "Store A"),
            ProjectItemResource::file("/tmp/out.gdx", "Exporter 1"),
        ];
        assert!(view.execute_forward(&resources).await);

        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].kind, MessageKind::Info);
        assert!(messages[0].text.contains("1 database resource(s)"));
    }

    #[test]
    fn test_factory_ignores_config() {
        let context = ItemContext::new(
            "View 1",
            "/projects/demo",
            serde_json::Value::Null,
            Arc::new(NullLogSink),
        );

        let executable = ViewFactory.make_executable(&context).unwrap();
        assert_eq!(executable.item_type(), "View");
    }
}

//! Test: path, query and typed output expand into a working operation.

use hyperswitch_api::{Field, Operation, Parsed};
use hyperswitch_api_macros::Operation;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Widget {
    pub id: String,
}

#[derive(Operation)]
#[operation(method = Get, path = "/widgets/{widget_id}", output = Widget, typed(200), empty(404))]
pub struct RetrieveWidget {
    #[operation(path)]
    pub widget_id: String,
    #[operation(query)]
    pub expand: Option<bool>,
    #[operation(query = "created.gte")]
    pub created_after: Field<String>,
}

fn main() {
    let op = RetrieveWidget {
        widget_id: "w_1".into(),
        expand: Some(true),
        created_after: Field::Null,
    };
    let request = op.build_request().unwrap();
    assert_eq!(request.path(), "/widgets/w_1");
    assert_eq!(request.query_value("expand"), Some("true"));
    assert_eq!(request.query_value("created.gte"), None);

    assert_eq!(RetrieveWidget::ID, "retrieve_widget");
    assert_eq!(RetrieveWidget::STATUSES, &[200, 404]);
    assert!(matches!(
        RetrieveWidget::parse_response(200, br#"{"id":"w_1"}"#),
        Ok(Parsed::Typed(Widget { .. }))
    ));
    assert!(matches!(RetrieveWidget::parse_response(404, b""), Ok(Parsed::Empty)));
    assert!(matches!(RetrieveWidget::parse_response(500, b""), Ok(Parsed::Undocumented)));
}

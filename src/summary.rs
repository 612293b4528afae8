//! Markdown summary of an oplet's current state, shown in the web UI.
//!
//! The template is fixed at build time, so failing to compile or render it is
//! a bug in this crate, not a data problem: both cases panic instead of
//! returning an error. Compilation happens once, on first use.

use crate::snapshot::{Agent, Oplet};
use crate::value::WEB_UI_HOST;
use handlebars::Handlebars;
use serde::Serialize;
use std::sync::LazyLock;

const TEMPLATE_NAME: &str = "oplet_summary";

// Incarnation is shown 0-based here, as stored, while the annotation maps
// show it 1-based. Externally visible UI text; do not "fix" one to match
// the other.
const TEMPLATE: &str = "\n\
## Oplet {{alias}}
Current operation id: [{{operation_id}}]({{web_ui_host}}/{{proxy}}/operations/{{operation_id}})
Current incarnation: {{incarnation_index}}
";

static TEMPLATES: LazyLock<Handlebars<'static>> =
    LazyLock::new(|| compile().expect("summary template must compile"));

fn compile() -> crate::Result<Handlebars<'static>> {
    let mut registry = Handlebars::new();
    // Output is markdown, not HTML.
    registry.register_escape_fn(handlebars::no_escape);
    registry.register_template_string(TEMPLATE_NAME, TEMPLATE)?;
    Ok(registry)
}

#[derive(Serialize)]
struct SummaryContext<'a> {
    alias: &'a str,
    operation_id: String,
    proxy: &'a str,
    incarnation_index: u64,
    web_ui_host: &'static str,
}

/// Renders the multi-line markdown block describing `oplet`.
pub fn render_summary(agent: &Agent, oplet: &Oplet) -> String {
    let context = SummaryContext {
        alias: &oplet.alias,
        operation_id: oplet.operation_id.to_string(),
        proxy: &agent.proxy,
        incarnation_index: oplet.incarnation_index,
        web_ui_host: WEB_UI_HOST,
    };

    TEMPLATES
        .render(TEMPLATE_NAME, &context)
        .expect("summary template must render plain string/integer fields")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{NodePath, OperationId};
    use pretty_assertions::assert_eq;

    fn agent() -> Agent {
        Agent {
            family: "chyt".to_string(),
            root: NodePath::new("//sys/oplets"),
            proxy: "hahn".to_string(),
            hostname: "controller-1.test".to_string(),
        }
    }

    #[test]
    fn summary_shows_alias_id_and_raw_incarnation() {
        let oplet = Oplet {
            alias: "demo".to_string(),
            incarnation_index: 4,
            operation_id: OperationId::from_parts(1, 2, 3, 4),
        };

        let text = render_summary(&agent(), &oplet);

        assert!(text.contains("demo"));
        assert!(text.contains("1-2-3-4"));
        // 0-based, as stored.
        assert!(text.contains("Current incarnation: 4"));
        assert!(text.contains("[1-2-3-4](https://yt.yandex-team.ru/hahn/operations/1-2-3-4)"));
    }

    #[test]
    fn summary_exact_shape() {
        let oplet = Oplet {
            alias: "demo".to_string(),
            incarnation_index: 0,
            operation_id: OperationId::NIL,
        };

        let text = render_summary(&agent(), &oplet);

        assert_eq!(
            text,
            "\n## Oplet demo\n\
             Current operation id: [0-0-0-0](https://yt.yandex-team.ru/hahn/operations/0-0-0-0)\n\
             Current incarnation: 0\n"
        );
    }

    #[test]
    fn summary_is_deterministic() {
        let oplet = Oplet {
            alias: "demo".to_string(),
            incarnation_index: 2,
            operation_id: OperationId::from_parts(9, 8, 7, 6),
        };
        assert_eq!(render_summary(&agent(), &oplet), render_summary(&agent(), &oplet));
    }
}

//! Serializes a settings map into the client UI library's
//! initialization `<script>` fragment.

use crate::case::{camelize_keys, CaseMode};
use crate::sink::OutputSink;
use serde_json::{Map, Value};

/// Builds the initialization script for the client-side UI library.
///
/// Settings keys are camelized (lower-first) in place before being
/// serialized, matching the option names the client library expects:
///
/// ```ignore
/// use touchmark::InitScript;
/// use serde_json::{json, Map};
///
/// let mut settings = Map::new();
/// settings.insert("status_bar".into(), json!("black-translucent"));
/// let script = InitScript::default().build(&mut settings);
/// // <script charset="utf-8" type="text/javascript">
/// // //<![CDATA[
/// // var jQT = new $.jQTouch({"statusBar":"black-translucent"});
/// // //]]>
/// // </script>
/// ```
#[derive(Debug, Clone)]
pub struct InitScript {
    constructor: String,
    var_name: String,
}

impl Default for InitScript {
    fn default() -> Self {
        Self {
            constructor: "$.jQTouch".to_string(),
            var_name: "jQT".to_string(),
        }
    }
}

impl InitScript {
    pub fn new(constructor: impl Into<String>, var_name: impl Into<String>) -> Self {
        Self {
            constructor: constructor.into(),
            var_name: var_name.into(),
        }
    }

    /// Build the script fragment. The settings map is camelized
    /// destructively, as [`camelize_keys`] documents.
    pub fn build(&self, settings: &mut Map<String, Value>) -> String {
        camelize_keys(settings, CaseMode::LowerFirst);
        let json = serde_json::to_string(settings).unwrap_or_default();
        format!(
            "<script charset=\"utf-8\" type=\"text/javascript\">\n//<![CDATA[\nvar {} = new {}({});\n//]]>\n</script>",
            self.var_name, self.constructor, json
        )
    }

    /// Build the fragment and append it to the sink.
    pub fn emit(&self, settings: &mut Map<String, Value>, sink: &mut dyn OutputSink) {
        sink.append(&self.build(settings));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::StringSink;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn build_produces_full_script_fragment() {
        let mut settings = Map::new();
        settings.insert("status_bar".to_string(), json!("black-translucent"));
        let script = InitScript::default().build(&mut settings);
        assert_eq!(
            script,
            "<script charset=\"utf-8\" type=\"text/javascript\">\n\
             //<![CDATA[\n\
             var jQT = new $.jQTouch({\"statusBar\":\"black-translucent\"});\n\
             //]]>\n\
             </script>"
        );
    }

    #[test]
    fn emit_appends_to_sink() {
        let mut settings = Map::new();
        let mut sink = StringSink::new();
        InitScript::default().emit(&mut settings, &mut sink);
        assert_eq!(
            sink.as_str(),
            "<script charset=\"utf-8\" type=\"text/javascript\">\n\
             //<![CDATA[\n\
             var jQT = new $.jQTouch({});\n\
             //]]>\n\
             </script>"
        );
    }

    #[test]
    fn custom_constructor_and_var() {
        let mut settings = Map::new();
        let script = InitScript::new("TouchKit", "kit").build(&mut settings);
        assert!(script.contains("var kit = new TouchKit({});"));
    }
}

//! Prometheus text exposition format.
//!
//! Renders the samples of one scrape cycle into the text exposition format
//! (version 0.0.4) for scraping by a Prometheus server or compatible agent.

use crate::collector::Sample;

/// `Content-Type` of the rendered exposition.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Render samples into Prometheus text format.
///
/// Each sample gets its own `# HELP` and `# TYPE` lines. Samples carry no
/// labels.
pub fn render_prometheus(samples: &[Sample<'_>]) -> String {
    let mut out = String::with_capacity(samples.len() * 160);

    for s in samples {
        let name = &s.desc.name;
        out.push_str(&format!("# HELP {name} {}\n", escape_help(&s.desc.help)));
        out.push_str(&format!("# TYPE {name} {}\n", s.desc.kind));
        out.push_str(&format!("{name} {}\n", format_value(s.value)));
    }

    out
}

fn escape_help(help: &str) -> String {
    help.replace('\\', "\\\\").replace('\n', "\\n")
}

fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        v.to_string()
    }
}

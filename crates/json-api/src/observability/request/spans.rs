//! HTTP span helpers.

use uuid::Uuid;

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_span_name: String,
}

/// Span name with uuid path segments collapsed, e.g. `PATCH /orders/{uuid}/lines/{uuid}`.
pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    RequestSpanName {
        otel_span_name: format!("{method} {}", normalise_path_for_span_name(path)),
    }
}

fn normalise_path_for_span_name(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            normalised.push_str("{uuid}");
        } else {
            normalised.push_str(segment);
        }
    }

    normalised
}

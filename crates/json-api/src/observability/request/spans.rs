//! Route labels for spans and metrics.

const KNOWN_ROUTES: [&str; 9] = [
    "/",
    "/health",
    "/api/dayoff/create",
    "/api/dayoff/delete",
    "/api/dayoff/search",
    "/api/dayoff/check",
    "/api-doc/openapi.json",
    "/docs",
    "/metrics",
];

/// Label a request path by the route it hits, folding everything else into one bucket so
/// arbitrary paths cannot inflate metric cardinality.
pub(super) fn route_label(path: &str) -> String {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    if KNOWN_ROUTES.contains(&trimmed) {
        return trimmed.to_owned();
    }

    if trimmed.starts_with("/docs/") {
        return "/docs".to_owned();
    }

    "{unmatched}".to_owned()
}

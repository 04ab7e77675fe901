use gotestsum_core::api as core_api;

use crate::format::{
    DebugFormatter, DotsFormatter, ShortFormatter, ShortVerboseFormatter, StandardQuietFormatter,
    StandardVerboseFormatter,
};

/// Names accepted by `--format`, with a one-line description each.
pub const FORMATS: [(&str, &str); 6] = [
    ("dots", "print a character for each test"),
    ("short", "print a line for each package"),
    ("short-verbose", "print a line for each test and package"),
    ("standard-quiet", "default go test format"),
    ("standard-verbose", "default go test -v format"),
    ("debug", "print each event with its fields"),
];

pub fn build_formatter(
    name: &str,
    ctx: core_api::FormatContext,
) -> Result<Box<dyn core_api::EventFormatter>, core_api::HandlerError> {
    tracing::debug!(target: "gotestsum.format", format = name, "building formatter");
    match name {
        "debug" => Ok(Box::new(DebugFormatter)),
        "standard-verbose" => Ok(Box::new(StandardVerboseFormatter)),
        "standard-quiet" => Ok(Box::new(StandardQuietFormatter)),
        "dots" => Ok(Box::new(DotsFormatter::new(ctx))),
        "short" => Ok(Box::new(ShortFormatter::new(ctx))),
        "short-verbose" => Ok(Box::new(ShortVerboseFormatter::new(ctx))),
        other => Err(core_api::HandlerError::UnknownFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_format_builds() {
        for (name, _) in FORMATS {
            assert!(
                build_formatter(name, core_api::FormatContext::plain()).is_ok(),
                "{name}"
            );
        }
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = build_formatter("tap", core_api::FormatContext::plain())
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "unknown format tap");
    }
}

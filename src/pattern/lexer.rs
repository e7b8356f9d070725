use super::{PatternError, PatternResult, SegmentKind, SegmentPattern};

/// Classifies a single pattern segment by its first character.
///
/// `*name[:re]` is a catch-all, `:name[:re]` a parameter, anything else a
/// literal. An empty constraint after the second `:` means "unconstrained".
#[tracing::instrument(level = "trace", skip(seg), fields(segment = %seg))]
pub fn parse_segment(seg: &str) -> PatternResult<SegmentPattern> {
    let (kind, body) = match seg.as_bytes().first() {
        Some(b'*') => (SegmentKind::CatchAll, &seg[1..]),
        Some(b':') => (SegmentKind::Param, &seg[1..]),
        _ => return Ok(SegmentPattern::literal(seg)),
    };

    let (name, constraint) = match memchr::memchr(b':', body.as_bytes()) {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };

    validate_param_name(seg, name)?;

    Ok(SegmentPattern {
        kind,
        label: name.to_string(),
        constraint: constraint
            .filter(|raw| !raw.is_empty())
            .map(str::to_string),
    })
}

fn validate_param_name(seg: &str, name: &str) -> PatternResult<()> {
    let bytes = name.as_bytes();
    let Some(&first) = bytes.first() else {
        // anonymous: matches without binding
        return Ok(());
    };

    if !(first.is_ascii_alphabetic() || first == b'_') {
        return Err(PatternError::ParameterInvalidStart {
            segment: seg.to_string(),
            name: name.to_string(),
            found: name.chars().next().unwrap_or(first as char),
        });
    }

    if let Some(invalid) = name
        .chars()
        .skip(1)
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(PatternError::ParameterInvalidCharacter {
            segment: seg.to_string(),
            name: name.to_string(),
            invalid,
        });
    }

    Ok(())
}

/// Which query parameters an announce must carry.
///
/// Passed into the validator at construction instead of living in a
/// global, so alternative rule sets stay a matter of wiring.
#[derive(Clone, Copy, Debug)]
pub struct ValidationRules {
    pub required_fields: &'static [&'static str],
}

/// Pipeline stage that turns the raw query map into a typed announce
/// request, rejecting malformed requests before any registry mutation.
#[derive(Debug)]
pub struct RequestValidator {
    pub(crate) rules: ValidationRules,
}

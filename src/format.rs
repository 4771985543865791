//! Per-request mobile/desktop format negotiation.
//!
//! The negotiator is constructed once when a handler type is registered
//! and shared by reference for the process lifetime; it holds no mutable
//! state. Run [`FormatNegotiator::negotiate`] as a pre-dispatch step,
//! before any rendering.

use regex::Regex;
use std::sync::OnceLock;

/// The active response format a request can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Mobile,
    Desktop,
}

/// Outcome of one negotiation. `Unchanged` means no mobile signal was
/// seen and the request's format field was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatDecision {
    Mobile,
    Desktop,
    Unchanged,
}

/// Read access to the current request plus read/write access to its
/// response-format field. Implemented by the host web framework's
/// request wrapper.
pub trait RequestContext {
    fn user_agent(&self) -> Option<&str>;

    /// Subdomains of the request host, leftmost first
    /// (`iphone.example.com` yields `["iphone"]`).
    fn subdomains(&self) -> &[String];

    fn cookie(&self, name: &str) -> Option<&str>;

    fn format(&self) -> Option<ResponseFormat>;

    fn set_format(&mut self, format: ResponseFormat);
}

/// Pure user-agent check for Mobile Safari, independent of any
/// negotiation outcome.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    static MOBILE_UA_RE: OnceLock<Regex> = OnceLock::new();
    let re = MOBILE_UA_RE.get_or_init(|| Regex::new(r"Mobile/.+Safari").unwrap());
    re.is_match(user_agent)
}

/// Decides per request whether to switch the active response format.
///
/// `test_mode` is fixed at construction (handler registration) and
/// forces every request to the mobile format; useful during development
/// and debugging.
#[derive(Debug, Clone, Copy)]
pub struct FormatNegotiator {
    test_mode: bool,
}

impl FormatNegotiator {
    pub fn new(test_mode: bool) -> Self {
        Self { test_mode }
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    /// True when the request's user agent is Mobile Safari.
    pub fn is_mobile_request(&self, req: &dyn RequestContext) -> bool {
        req.user_agent().is_some_and(is_mobile_user_agent)
    }

    /// Run one format decision and write the request's format field when
    /// a mobile signal is present. Never fails: no signal is a no-op.
    ///
    /// A device user can opt back into the full site by setting the
    /// `browser` cookie to `desktop`.
    pub fn negotiate(&self, req: &mut dyn RequestContext) -> FormatDecision {
        if self.test_mode {
            req.set_format(ResponseFormat::Mobile);
            log::debug!("format negotiation: test mode, forcing mobile");
            return FormatDecision::Mobile;
        }

        let mobile_signal = self.is_mobile_request(req)
            || req.format() == Some(ResponseFormat::Mobile)
            || req.subdomains().first().map(String::as_str) == Some("iphone");

        if !mobile_signal {
            log::debug!("format negotiation: no mobile signal, format unchanged");
            return FormatDecision::Unchanged;
        }

        let decision = if req.cookie("browser") == Some("desktop") {
            req.set_format(ResponseFormat::Desktop);
            FormatDecision::Desktop
        } else {
            req.set_format(ResponseFormat::Mobile);
            FormatDecision::Mobile
        };
        log::debug!("format negotiation: {:?}", decision);
        decision
    }
}

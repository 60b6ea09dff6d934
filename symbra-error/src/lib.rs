//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the span-carrying [`Error`] type that wraps them.

pub use ariadne;

use ariadne::{Color, Report};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually derived with `symbra_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns this error kind as [`Any`], so that it can be downcast to its concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error pointing at a single byte offset.
    pub fn at(position: usize, kind: impl ErrorKind + 'static) -> Self {
        Self::new(vec![position..position + 1], kind)
    }

    /// Returns the byte offset of the first span, which is where the error is reported.
    pub fn position(&self) -> usize {
        self.spans.first().map_or(0, |span| span.start)
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as `K`, if it is one.
    pub fn downcast_kind<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ariadne::{Label, ReportKind};

    #[derive(Debug, PartialEq)]
    struct Oops {
        code: u8,
    }

    impl ErrorKind for Oops {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start)
                .with_message(format!("oops {}", self.code))
                .with_label(Label::new((src_id, spans[0].clone())))
                .finish()
        }
    }

    #[derive(Debug)]
    struct Other;

    impl ErrorKind for Other {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start).finish()
        }
    }

    #[test]
    fn downcast_kind() {
        let err = Error::at(7, Oops { code: 3 });
        assert!(err.is::<Oops>());
        assert!(!err.is::<Other>());
        assert_eq!(err.downcast_kind::<Oops>(), Some(&Oops { code: 3 }));
        assert_eq!(err.position(), 7);
        assert_eq!(err.spans, vec![7..8]);
    }

    #[test]
    fn position_without_spans() {
        let err = Error::new(Vec::new(), Other);
        assert_eq!(err.position(), 0);
    }
}

//! Decorator: optional embellishments wrap a report instead of living as
//! extra methods on it, so they compose in any order.

pub const BASIC_REPORT: &str = "Basic report";
pub const HEADER: &str = "Header";
pub const FOOTER: &str = "Report footer";

pub trait Report {
    fn generate(&self) -> String;
}

impl<F: Fn() -> String> Report for F {
    fn generate(&self) -> String {
        self()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicReport;

impl Report for BasicReport {
    fn generate(&self) -> String {
        BASIC_REPORT.to_string()
    }
}

pub struct WithHeader<R: Report> {
    inner: R,
}

impl<R: Report> WithHeader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Report> Report for WithHeader<R> {
    fn generate(&self) -> String {
        format!("{}\n{}", HEADER, self.inner.generate())
    }
}

pub struct WithFooter<R: Report> {
    inner: R,
}

impl<R: Report> WithFooter<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Report> Report for WithFooter<R> {
    fn generate(&self) -> String {
        format!("{}\n{}", self.inner.generate(), FOOTER)
    }
}

/// Function-composition form of [`WithFooter`].
pub fn footed(report: impl Report) -> impl Report {
    move || format!("{}\n{}", report.generate(), FOOTER)
}

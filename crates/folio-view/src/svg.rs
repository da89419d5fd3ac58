//! Minimal SVG and HTML writing helpers shared by the renderers.

use std::fmt::{self, Write};

use folio_topology::Color;

/// Escape text for use inside HTML or SVG element content and attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Append-only SVG document.
///
/// Elements are written in paint order; later elements draw on top.
#[derive(Debug)]
pub(crate) struct SvgDoc {
    width: f64,
    height: f64,
    body: String,
}

impl SvgDoc {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub(crate) fn line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stroke: &Color,
        width: f64,
    ) -> &mut Self {
        self.write(format_args!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{width}"/>"#,
            from.0, from.1, to.0, to.1
        ))
    }

    /// A line with opacity and an optional `data-*` hook for pointer handlers.
    pub(crate) fn line_with(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stroke: &Color,
        width: f64,
        opacity: f64,
        extra: &str,
    ) -> &mut Self {
        self.write(format_args!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{width}" opacity="{opacity}"{extra}/>"#,
            from.0, from.1, to.0, to.1
        ))
    }

    pub(crate) fn dashed_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stroke: &Color,
    ) -> &mut Self {
        self.write(format_args!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{stroke}" stroke-dasharray="3 3"/>"#,
            from.0, from.1, to.0, to.1
        ))
    }

    pub(crate) fn circle(
        &mut self,
        center: (f64, f64),
        r: f64,
        fill: &Color,
        opacity: f64,
        extra: &str,
    ) -> &mut Self {
        self.write(format_args!(
            r#"<circle cx="{}" cy="{}" r="{r}" fill="{fill}" opacity="{opacity}"{extra}/>"#,
            center.0, center.1
        ))
    }

    pub(crate) fn ring(&mut self, center: (f64, f64), r: f64, stroke: &Color) -> &mut Self {
        self.write(format_args!(
            r#"<circle cx="{}" cy="{}" r="{r}" fill="none" stroke="{stroke}" stroke-width="1"/>"#,
            center.0, center.1
        ))
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        fill: &Color,
        stroke: Option<&Color>,
    ) -> &mut Self {
        match stroke {
            Some(stroke) => self.write(format_args!(
                r#"<rect x="{x:.1}" y="{y:.1}" width="{width:.1}" height="{height:.1}" rx="{rx}" fill="{fill}" stroke="{stroke}" stroke-width="1"/>"#
            )),
            None => self.write(format_args!(
                r#"<rect x="{x:.1}" y="{y:.1}" width="{width:.1}" height="{height:.1}" rx="{rx}" fill="{fill}"/>"#
            )),
        }
    }

    /// Monospace text; `attrs` is appended verbatim.
    pub(crate) fn text(
        &mut self,
        at: (f64, f64),
        content: &str,
        fill: &Color,
        size: u32,
        attrs: &str,
    ) -> &mut Self {
        self.write(format_args!(
            r#"<text x="{:.1}" y="{:.1}" fill="{fill}" font-size="{size}" font-family="monospace"{attrs}>{}</text>"#,
            at.0,
            at.1,
            escape(content)
        ))
    }

    pub(crate) fn open_group(&mut self, attrs: &str) -> &mut Self {
        self.write(format_args!("<g{attrs}>"))
    }

    pub(crate) fn close_group(&mut self) -> &mut Self {
        self.body.push_str("</g>");
        self
    }

    /// Open an `<a>` around the following elements; `href` is escaped here.
    pub(crate) fn open_link(&mut self, href: &str) -> &mut Self {
        self.write(format_args!(r#"<a href="{}">"#, escape(href)))
    }

    pub(crate) fn close_link(&mut self) -> &mut Self {
        self.body.push_str("</a>");
        self
    }

    fn write(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        // Writing into a String cannot fail.
        let _ = self.body.write_fmt(args);
        self
    }

    pub(crate) fn finish(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{body}</svg>"#,
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

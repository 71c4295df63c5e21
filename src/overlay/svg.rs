//! SVG assembly for the guide overlay

use crate::geometry::Rect;

use super::OverlayConfig;

/// Build overlay SVG elements incrementally
pub(crate) struct SvgBuilder {
    config: OverlayConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    pub(crate) fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add one dashed outline for a layout region
    pub(crate) fn add_outline(&mut self, kind: &str, name: &str, frame: Rect, color: &str) {
        let prefix = self.prefix();
        let (dash_on, dash_off) = self.config.dash;
        let animation = if self.config.animated {
            format!(
                r#"{}{}<animate attributeName="stroke-dashoffset" from="0" to="{}" dur="{}s" repeatCount="indefinite"/>{}"#,
                self.newline(),
                if self.config.pretty_print {
                    "  ".repeat(self.indent + 1)
                } else {
                    String::new()
                },
                dash_on + dash_off,
                self.config.animation_period,
                self.newline(),
            )
        } else {
            String::new()
        };
        let closing = if self.config.animated {
            format!("{}</rect>", self.indent_str())
        } else {
            "/>".to_string()
        };
        let open_end = if self.config.animated { ">" } else { "" };

        self.elements.push(format!(
            r#"{indent}<rect class="{prefix}{kind}" data-name="{name}" x="{x}" y="{y}" width="{w}" height="{h}" fill="none" stroke="{color}" stroke-width="{sw}" stroke-dasharray="{dash_on} {dash_off}"{open_end}{animation}{closing}"#,
            indent = self.indent_str(),
            prefix = prefix,
            kind = kind,
            name = name,
            x = frame.x,
            y = frame.y,
            w = frame.width,
            h = frame.height,
            color = color,
            sw = self.config.stroke_width,
            dash_on = dash_on,
            dash_off = dash_off,
            open_end = open_end,
            animation = animation,
            closing = closing,
        ));
    }

    /// Assemble the final document around the given content bounds
    pub(crate) fn build(self, bounds: Rect) -> String {
        let pad = self.config.viewbox_padding;
        let viewbox = format!(
            "{} {} {} {}",
            bounds.x - pad,
            bounds.y - pad,
            bounds.width + 2.0 * pad,
            bounds.height + 2.0 * pad,
        );
        let newline = if self.config.pretty_print { "\n" } else { "" };
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">{}"#,
            viewbox, newline
        );
        for element in &self.elements {
            svg.push_str(element);
            svg.push_str(newline);
        }
        svg.push_str("</svg>");
        svg.push_str(newline);
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_outline_is_self_closing() {
        let mut builder = SvgBuilder::new(OverlayConfig::new().with_animated(false));
        builder.add_outline("guide", "g", Rect::new(0.0, 0.0, 10.0, 10.0), "red");
        let svg = builder.build(Rect::new(0.0, 0.0, 10.0, 10.0));

        assert!(svg.contains("stroke-dasharray"));
        assert!(!svg.contains("<animate"));
        assert!(svg.contains("/>"));
    }

    #[test]
    fn test_animated_outline_has_animate_child() {
        let mut builder = SvgBuilder::new(OverlayConfig::new());
        builder.add_outline("guide", "g", Rect::new(0.0, 0.0, 10.0, 10.0), "red");
        let svg = builder.build(Rect::new(0.0, 0.0, 10.0, 10.0));

        assert!(svg.contains("<animate attributeName=\"stroke-dashoffset\""));
        assert!(svg.contains("</rect>"));
    }

    #[test]
    fn test_viewbox_includes_padding() {
        let builder = SvgBuilder::new(OverlayConfig::new().with_viewbox_padding(10.0));
        let svg = builder.build(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert!(svg.contains(r#"viewBox="-10 -10 120 70""#));
    }
}

// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A retained SVG renderer for the label column.
//!
//! Labels are kept per slot and only touched when a diff names them, the way a
//! view-based renderer would keep one text view per label.

use std::collections::HashMap;
use std::fmt::Write as _;

use kurbo::Rect;
use peniko::Color;
use reflabel::{LabelLayout, LabelSlot, PlacementDiff};

#[derive(Debug)]
struct RenderedLabel {
    rect: Rect,
    text: String,
}

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    labels: HashMap<LabelSlot, RenderedLabel>,
    chrome: Option<LabelLayout>,
    plot_width: f64,
}

impl SvgScene {
    pub(crate) fn new(plot_width: f64) -> Self {
        Self {
            plot_width,
            ..Self::default()
        }
    }

    /// Applies `diffs`, taking frames for entered and updated slots from
    /// `layout`. Returns `(entered, updated, exited)`.
    pub(crate) fn apply_diffs(
        &mut self,
        diffs: &[PlacementDiff],
        layout: &LabelLayout,
    ) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for diff in diffs {
            match diff {
                PlacementDiff::Enter { slot, .. } | PlacementDiff::Update { slot, .. } => {
                    let Some(frame) = layout.labels.iter().find(|l| l.slot == *slot) else {
                        // Labels are hidden in this layout.
                        continue;
                    };
                    let rendered = RenderedLabel {
                        rect: layout.label_rect_in_chart(frame),
                        text: frame.text.clone(),
                    };
                    if self.labels.insert(*slot, rendered).is_some() {
                        counts.1 += 1;
                    } else {
                        counts.0 += 1;
                    }
                }
                PlacementDiff::Exit { slot, .. } => {
                    if self.labels.remove(slot).is_some() {
                        counts.2 += 1;
                    }
                }
            }
        }
        self.chrome = Some(layout.clone());
        counts
    }

    /// Drops everything, for frames whose geometry could not be laid out.
    pub(crate) fn clear(&mut self) {
        self.labels.clear();
        self.chrome = None;
    }

    pub(crate) fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let Some(layout) = &self.chrome else {
            return String::from(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"0\" height=\"0\"/>\n",
            );
        };
        let width = self.plot_width.max(layout.view.x1);
        let height = layout.view.height();
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
        );

        let container = layout.container + layout.view.origin().to_vec2();
        write_rect(&mut out, container, layout.background_fill);

        let mut slots: Vec<_> = self.labels.keys().copied().collect();
        slots.sort();
        for slot in &slots {
            let label = &self.labels[slot];
            let y = label.rect.center().y;
            let _ = write!(
                out,
                r#"<line x1="0" y1="{y}" x2="{}" y2="{y}" stroke-width="0.5""#,
                layout.view.x0
            );
            write_paint_attr(&mut out, "stroke", layout.border_fill);
            out.push_str("/>\n");
        }

        let border = layout.border + layout.view.origin().to_vec2();
        write_rect(&mut out, border, layout.border_fill);

        let family = layout.label_style.font_family.as_css_family();
        for slot in &slots {
            let label = &self.labels[slot];
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" font-family="{}" dominant-baseline="middle""#,
                label.rect.x0,
                label.rect.center().y,
                layout.label_style.font_size,
                escape_xml(family),
            );
            write_paint_attr(&mut out, "fill", layout.label_fill);
            out.push('>');
            out.push_str(&escape_xml(&label.text));
            out.push_str("</text>\n");
        }

        out.push_str("</svg>\n");
        out
    }
}

fn write_rect(out: &mut String, rect: Rect, fill: Color) {
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height()
    );
    write_paint_attr(out, "fill", fill);
    out.push_str("/>\n");
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    let _ = write!(
        out,
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    );
    if rgba.a != 255 {
        let _ = write!(out, r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use reflabel::{
        HeuristicTextMeasurer, LabelPolicy, ReferenceLabelSettings, ReferenceLabelView,
        diff_placements,
    };

    use super::*;

    #[test]
    fn diffs_drive_the_retained_labels() {
        let mut view = ReferenceLabelView::new(
            300.0,
            210.0,
            ReferenceLabelSettings::default(),
            LabelPolicy::relative([0.5]),
        );
        let mut scene = SvgScene::new(300.0);

        let diffs = view.set_range(0.0, 100.0).unwrap();
        let layout = view.layout(&HeuristicTextMeasurer).unwrap();
        // The constructor already placed 0..100, so nothing changed.
        assert!(diffs.is_empty());
        let all_enter = diff_placements(&[], view.label_placements());
        assert_eq!(scene.apply_diffs(&all_enter, &layout), (3, 0, 0));

        let diffs = view.set_range(0.0, 10.0).unwrap();
        let layout = view.layout(&HeuristicTextMeasurer).unwrap();
        assert_eq!(scene.apply_diffs(&diffs, &layout), (0, 2, 0));
        assert_eq!(scene.label_count(), 3);

        let svg = scene.to_svg_string();
        assert!(svg.contains(">10</text>"), "{svg}");
        assert!(svg.contains(">5</text>"), "{svg}");
        assert!(!svg.contains(">100</text>"), "{svg}");
    }

    #[test]
    fn showing_hidden_labels_renders_them() {
        let hidden = ReferenceLabelSettings::default().with_labels(false);
        let mut view =
            ReferenceLabelView::new(300.0, 210.0, hidden, LabelPolicy::relative([0.5]));
        let mut scene = SvgScene::new(300.0);

        let all_enter = diff_placements(&[], view.label_placements());
        let layout = view.layout(&HeuristicTextMeasurer).unwrap();
        assert_eq!(scene.apply_diffs(&all_enter, &layout), (0, 0, 0));
        assert_eq!(scene.label_count(), 0);

        let diffs = view
            .set_settings(ReferenceLabelSettings::default())
            .unwrap();
        let layout = view.layout(&HeuristicTextMeasurer).unwrap();
        assert_eq!(scene.apply_diffs(&diffs, &layout), (3, 0, 0));
        assert_eq!(scene.label_count(), 3);

        let diffs = view
            .set_settings(ReferenceLabelSettings::default().with_labels(false))
            .unwrap();
        let layout = view.layout(&HeuristicTextMeasurer).unwrap();
        assert_eq!(scene.apply_diffs(&diffs, &layout), (0, 0, 3));
        assert_eq!(scene.label_count(), 0);
    }

    #[test]
    fn escapes_text() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}

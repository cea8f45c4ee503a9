// Copyright 2026 the reflabel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walks a reference label column through a series of range, viewport and
//! policy changes, re-rendering from diffs, and writes the final frame to
//! `reflabel_demo.svg`.

mod logger;
mod svg;

use std::io;

use peniko::color::palette::css;
use reflabel::{
    HeuristicTextMeasurer, LabelError, LabelPolicy, NumberStyle, PlacementDiff,
    ReferenceLabelSettings, ReferenceLabelView, TextStyle, diff_placements,
};

const OUTPUT: &str = "reflabel_demo.svg";

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    SetLog(#[from] log::SetLoggerError),
    #[error(transparent)]
    ParseLevel(#[from] log::ParseLevelError),
}

enum Step {
    Range(f64, f64),
    Viewport(f64, f64),
    Policy(LabelPolicy),
}

fn main() -> Result<(), Error> {
    logger::setup()?;

    let settings = ReferenceLabelSettings::default()
        .with_label_style(TextStyle::new(10.0))
        .with_background_color(css::WHITE_SMOKE)
        .with_data_point_labels(10.0, 0.0, Some(10.0));
    let policy = LabelPolicy::default()
        .with_decimal_places(1)
        .with_number_style(NumberStyle::Decimal);
    let quarters = policy.clone();

    let mut view = ReferenceLabelView::new(320.0, 210.0, settings, policy);
    let measurer = HeuristicTextMeasurer;
    let mut scene = svg::SvgScene::new(320.0);

    let initial = diff_placements(&[], view.label_placements());
    render(&view, &measurer, &mut scene, Ok(initial));

    let steps = [
        Step::Range(0.0, 2500.0),
        Step::Viewport(360.0, 300.0),
        Step::Range(42.0, 42.0),
        Step::Range(-12.5, 87.5),
        Step::Policy(LabelPolicy::absolute()),
        Step::Policy(quarters.with_min(false).with_max(false)),
        Step::Range(-1250.0, 98_750.0),
    ];
    for step in steps {
        let result = match step {
            Step::Range(min, max) => {
                log::info!("range {min}..{max}");
                view.set_range(min, max)
            }
            Step::Viewport(width, height) => {
                log::info!("viewport {width}x{height}");
                scene = svg::SvgScene::new(width);
                // A fresh scene has nothing rendered yet.
                view.set_viewport(width, height)
                    .map(|_| diff_placements(&[], view.label_placements()))
            }
            Step::Policy(policy) => {
                log::info!("policy {:?}", policy.position_mode);
                view.set_policy(policy)
            }
        };
        render(&view, &measurer, &mut scene, result);
    }

    std::fs::write(OUTPUT, scene.to_svg_string())?;
    log::info!("wrote {OUTPUT} with {} labels", scene.label_count());
    Ok(())
}

fn render(
    view: &ReferenceLabelView,
    measurer: &HeuristicTextMeasurer,
    scene: &mut svg::SvgScene,
    diffs: Result<Vec<PlacementDiff>, LabelError>,
) {
    let layout = diffs.and_then(|diffs| Ok((diffs, view.layout(measurer)?)));
    match layout {
        Ok((diffs, layout)) => {
            let (entered, updated, exited) = scene.apply_diffs(&diffs, &layout);
            log::info!("rendered: {entered} entered, {updated} updated, {exited} exited");
            for label in &layout.labels {
                log::debug!("  {:?} {:>10} at {:?}", label.slot, label.text, label.rect);
            }
        }
        Err(err) => {
            log::warn!("skipping frame: {err}");
            scene.clear();
        }
    }
}

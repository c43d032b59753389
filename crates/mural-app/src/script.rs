//! Gesture scripts and their replay.

use kurbo::Point;
use mural_core::{
    Action, Canvas, ConfigError, CursorHint, Document, DocumentError, EngineConfig, Modifiers, MonospaceMeasure,
    MuralError, PointerEvent, TextMeasure,
};
use mural_render::{RecordingSurface, Renderer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that stop a replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{}: {source}", path.display())]
    Document {
        path: PathBuf,
        source: DocumentError,
    },
    #[error("Step {index}: {source}")]
    Step { index: usize, source: MuralError },
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Select a tool by name.
    Tool(String),
    Down([f64; 2]),
    Move([f64; 2]),
    Up([f64; 2]),
    /// Finish text editing with this content.
    Blur(String),
    /// A key press, e.g. `{"key": {"key": "z", "ctrl": true}}`.
    Key {
        key: String,
        #[serde(flatten)]
        modifiers: Modifiers,
    },
    /// Record the cursor hint at a position.
    Hover([f64; 2]),
    Undo,
    Redo,
    Cancel,
    Clear,
}

/// A step whose gesture the engine rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedStep {
    pub index: usize,
    pub reason: String,
}

/// Summary of a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub steps: usize,
    pub rejected: Vec<RejectedStep>,
    /// Cursor hints from `hover` steps, in order.
    pub cursors: Vec<CursorHint>,
    pub history_len: usize,
    pub history_index: usize,
    /// Gesture still in progress when the script ended.
    pub action: Action,
}

fn point([x, y]: [f64; 2]) -> Point {
    Point::new(x, y)
}

/// Feed `steps` to `canvas`.
///
/// Rejected gestures are recorded and the replay continues, since the canvas
/// is back to idle afterwards. Unknown tool names stop the replay.
pub fn replay<M: TextMeasure>(
    canvas: &mut Canvas<M>,
    steps: &[Step],
) -> Result<ReplayReport, ReplayError> {
    let mut rejected = Vec::new();
    let mut cursors = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        log::trace!("Step {index}: {step:?}");
        let result = match step {
            Step::Tool(name) => {
                canvas
                    .set_tool_named(name)
                    .map_err(|source| ReplayError::Step { index, source })?;
                Ok(())
            }
            Step::Down(p) => canvas.handle_pointer(PointerEvent::Down(point(*p))),
            Step::Move(p) => canvas.handle_pointer(PointerEvent::Move(point(*p))),
            Step::Up(p) => canvas.handle_pointer(PointerEvent::Up(point(*p))),
            Step::Blur(text) => canvas.handle_pointer(PointerEvent::Blur(text.clone())),
            Step::Key { key, modifiers } => {
                if !canvas.handle_key(key, *modifiers) {
                    log::debug!("Step {index}: key {key:?} has no binding");
                }
                Ok(())
            }
            Step::Hover(p) => {
                cursors.push(canvas.hover(point(*p)));
                Ok(())
            }
            Step::Undo => {
                canvas.undo();
                Ok(())
            }
            Step::Redo => {
                canvas.redo();
                Ok(())
            }
            Step::Cancel => {
                canvas.cancel();
                Ok(())
            }
            Step::Clear => {
                canvas.clear();
                Ok(())
            }
        };
        if let Err(err) = result {
            log::warn!("Step {index} rejected: {err}");
            rejected.push(RejectedStep {
                index,
                reason: err.to_string(),
            });
        }
    }

    Ok(ReplayReport {
        steps: steps.len(),
        rejected,
        cursors,
        history_len: canvas.history().len(),
        history_index: canvas.history().index(),
        action: canvas.action(),
    })
}

/// Inputs for [`run`].
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub script: PathBuf,
    pub config: Option<PathBuf>,
    pub document: Option<PathBuf>,
    /// Output the recorded draw calls instead of the document.
    pub draw_calls: bool,
}

fn read(path: &Path) -> Result<String, ReplayError> {
    std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load everything named in `options`, replay the script and return the
/// resulting document (or draw calls) as JSON.
pub fn run(options: &Options) -> Result<String, ReplayError> {
    let config = match &options.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    let document = match &options.document {
        Some(path) => Document::from_json(&read(path)?, &config.rough).map_err(|source| {
            ReplayError::Document {
                path: path.clone(),
                source,
            }
        })?,
        None => Document::new(),
    };
    let steps: Vec<Step> = serde_json::from_str(&read(&options.script)?)?;

    let mut canvas = Canvas::with_document(document, config, MonospaceMeasure::default());
    let report = replay(&mut canvas, &steps)?;
    log::info!(
        "Replayed {} steps ({} rejected), history {}/{}",
        report.steps,
        report.rejected.len(),
        report.history_index + 1,
        report.history_len
    );

    if options.draw_calls {
        let mut renderer = Renderer::new(RecordingSurface::new());
        renderer.render_canvas(&canvas);
        Ok(serde_json::to_string_pretty(renderer.surface().commands())?)
    } else {
        Ok(canvas.document().to_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mural_core::{Coords, Element};
    use std::io::Write;

    fn parse(json: &str) -> Vec<Step> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_steps() {
        let steps = parse(
            r#"[
                {"tool": "line"},
                {"down": [1, 2]},
                {"key": {"key": "z", "ctrl": true}},
                "undo"
            ]"#,
        );
        assert_eq!(steps[0], Step::Tool("line".to_string()));
        assert_eq!(steps[1], Step::Down([1.0, 2.0]));
        assert_eq!(
            steps[2],
            Step::Key {
                key: "z".to_string(),
                modifiers: Modifiers {
                    ctrl: true,
                    ..Default::default()
                },
            }
        );
        assert_eq!(steps[3], Step::Undo);
    }

    #[test]
    fn test_replay_draw_and_move() {
        let steps = parse(
            r#"[
                {"tool": "rectangle"},
                {"down": [10, 10]}, {"move": [50, 40]}, {"up": [50, 40]},
                {"tool": "selection"},
                {"hover": [30, 20]},
                {"down": [30, 20]}, {"move": [40, 30]}, {"up": [40, 30]}
            ]"#,
        );
        let mut canvas: Canvas = Canvas::default();
        let report = replay(&mut canvas, &steps).unwrap();

        assert!(report.rejected.is_empty());
        assert_eq!(report.cursors, vec![CursorHint::Move]);
        assert_eq!(report.history_len, 3);
        assert_eq!(report.action, Action::None);
        assert_eq!(
            canvas.document().get(0).and_then(Element::coords),
            Some(Coords::new(20.0, 20.0, 60.0, 50.0))
        );
    }

    #[test]
    fn test_replay_unknown_tool_stops() {
        let steps = parse(r#"[{"down": [0, 0]}, {"tool": "ellipse"}]"#);
        let mut canvas: Canvas = Canvas::default();
        let err = replay(&mut canvas, &steps).unwrap_err();
        assert!(matches!(err, ReplayError::Step { index: 1, .. }));
    }

    #[test]
    fn test_replay_text_and_undo_shortcut() {
        let steps = parse(
            r#"[
                {"tool": "text"},
                {"down": [5, 5]}, {"up": [5, 5]},
                {"blur": "abc"},
                {"key": {"key": "z", "meta": true}}
            ]"#,
        );
        let mut canvas: Canvas = Canvas::default();
        let report = replay(&mut canvas, &steps).unwrap();
        assert_eq!(report.history_index, 0);
        assert!(canvas.document().is_empty());
    }

    #[test]
    fn test_run_outputs_document() {
        let mut script = tempfile::NamedTempFile::new().unwrap();
        write!(
            script,
            r#"[{{"tool": "line"}}, {{"down": [10, 0]}}, {{"move": [0, 0]}}, {{"up": [0, 0]}}]"#
        )
        .unwrap();

        let output = run(&Options {
            script: script.path().to_path_buf(),
            ..Default::default()
        })
        .unwrap();
        let document = Document::from_json(&output, &Default::default()).unwrap();
        assert_eq!(
            document.get(0).and_then(Element::coords),
            Some(Coords::new(0.0, 0.0, 10.0, 0.0))
        );
    }

    #[test]
    fn test_run_with_document_and_draw_calls() {
        let dir = tempfile::tempdir().unwrap();
        let doc_path = dir.path().join("doc.json");
        let script_path = dir.path().join("script.json");
        std::fs::write(
            &doc_path,
            r#"[{"type": "rectangle", "id": 0, "x1": 0, "y1": 0, "x2": 10, "y2": 10}]"#,
        )
        .unwrap();
        std::fs::write(&script_path, r#"[{"tool": "pencil"}, {"down": [20, 20]}, {"up": [20, 20]}]"#)
            .unwrap();

        let output = run(&Options {
            script: script_path,
            document: Some(doc_path),
            draw_calls: true,
            ..Default::default()
        })
        .unwrap();
        let commands: serde_json::Value = serde_json::from_str(&output).unwrap();
        let ops: Vec<&str> = commands
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|c| c["op"].as_str())
            .collect();
        assert_eq!(ops, vec!["clear", "rough", "fill"]);
    }

    #[test]
    fn test_run_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let doc_path = dir.path().join("doc.json");
        let script_path = dir.path().join("script.json");
        std::fs::write(
            &doc_path,
            r#"[
                {"type": "rectangle", "id": 0, "x1": 0, "y1": 0, "x2": 10, "y2": 10},
                {"type": "rectangle", "id": 0, "x1": 100, "y1": 100, "x2": 120, "y2": 120}
            ]"#,
        )
        .unwrap();
        std::fs::write(
            &script_path,
            r#"[{"tool": "selection"}, {"down": [110, 110]}, {"move": [210, 210]}, {"up": [210, 210]}]"#,
        )
        .unwrap();

        let err = run(&Options {
            script: script_path,
            document: Some(doc_path),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ReplayError::Document {
                source: DocumentError::IdMismatch { index: 1, id: 0 },
                ..
            }
        ));
    }

    #[test]
    fn test_run_missing_script() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&Options {
            script: dir.path().join("missing.json"),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, ReplayError::Io { .. }));
    }
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::CanvasSettings;
use crate::error::IsocalError;
use crate::layout::LayoutConfig;
use crate::models::{RenderInstruction, ScreenPoint, StatisticsSummary};

/// Everything a painter needs: surface size, origin, blocks in paint order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub origin: ScreenPoint,
    pub instructions: Vec<RenderInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<StatisticsSummary>,
}

impl Scene {
    pub fn new(
        canvas: &CanvasSettings,
        layout: &LayoutConfig,
        instructions: Vec<RenderInstruction>,
    ) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            origin: ScreenPoint {
                x: layout.origin_x,
                y: layout.origin_y,
            },
            instructions,
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: StatisticsSummary) -> Self {
        self.summary = Some(summary);
        self
    }
}

/// Consumer of a finished scene. Instructions must be painted in order since
/// later blocks occlude earlier ones.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> Result<()>;
}

/// Hands the scene to an external painter as pretty JSON.
pub struct SceneWriter<W: Write> {
    out: W,
}

impl<W: Write> SceneWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for SceneWriter<W> {
    fn render(&mut self, scene: &Scene) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, scene).context("Serializing scene")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Write `scene` to `path`, failing if the target directory is not there.
pub fn write_scene_file(path: &Path, scene: &Scene) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(IsocalError::RenderTargetMissing(path.to_path_buf()).into());
        }
    }
    let file = File::create(path).with_context(|| format!("Creating {:?}", path))?;
    let mut writer = SceneWriter::new(BufWriter::new(file));
    writer.render(scene)?;

    if !path.exists() {
        return Err(IsocalError::RenderTargetMissing(path.to_path_buf()).into());
    }
    info!("Wrote {} blocks to {:?}", scene.instructions.len(), path);
    Ok(())
}

use crate::{RenderSink, SkyMap, SkyMapResult};
use std::io::Write;

/// Pretty-printed JSON of the whole map: parameters, stars and summary.
pub struct JsonRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for JsonRenderer<W> {
    fn render(&mut self, map: &SkyMap) -> SkyMapResult<()> {
        serde_json::to_writer_pretty(&mut self.writer, map)?;
        Ok(())
    }
}

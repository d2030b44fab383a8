mod label_renderer_port;

pub use label_renderer_port::LabelRendererPort;

#[cfg(test)]
pub use label_renderer_port::MockLabelRendererPort;

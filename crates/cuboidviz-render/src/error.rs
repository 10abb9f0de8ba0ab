use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("image of {width}x{height} cannot back a drawing surface")]
    Surface { width: u32, height: u32 },
}

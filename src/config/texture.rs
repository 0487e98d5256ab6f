use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureSize {
    pub width: usize,
    pub height: usize,
}

impl TextureSize {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            Err(Error::EmptyTexture)
        } else {
            Ok(())
        }
    }
}

impl Default for TextureSize {
    fn default() -> Self {
        TextureSize {
            width: 128,
            height: 64,
        }
    }
}

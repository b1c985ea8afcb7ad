//! Image preprocessing for the MobileNetV2-family classifier

use image::{imageops, DynamicImage};

/// Side length of the square model input
pub const INPUT_SIZE: u32 = 224;

const CHANNELS: usize = 3;

/// A batch of one image in NHWC layout, normalized to [-1, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct InputBatch {
    data: Vec<f32>,
    shape: [usize; 4],
}

impl InputBatch {
    /// Shape as `[batch, height, width, channels]`
    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    /// Flat row-major values
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Value at `(y, x, c)` of the single image in the batch
    pub fn get(&self, y: usize, x: usize, c: usize) -> Option<f32> {
        let [_, height, width, channels] = self.shape;
        if y >= height || x >= width || c >= channels {
            return None;
        }
        self.data.get((y * width + x) * channels + c).copied()
    }
}

/// Resize to 224x224, add a batch dimension, and scale pixels with the
/// MobileNetV2 convention `x / 127.5 - 1`.
///
/// The aspect ratio is not preserved. Alpha and grayscale inputs are
/// converted to RGB first.
pub fn preprocess(image: &DynamicImage) -> InputBatch {
    let rgb = image.to_rgb8();
    let resized = if rgb.width() == INPUT_SIZE && rgb.height() == INPUT_SIZE {
        rgb
    } else {
        imageops::resize(&rgb, INPUT_SIZE, INPUT_SIZE, imageops::FilterType::CatmullRom)
    };

    let side = INPUT_SIZE as usize;
    let mut data = Vec::with_capacity(side * side * CHANNELS);
    for pixel in resized.pixels() {
        for value in pixel.0 {
            data.push(normalize(value));
        }
    }

    InputBatch {
        data,
        shape: [1, side, side, CHANNELS],
    }
}

fn normalize(value: u8) -> f32 {
    value as f32 / 127.5 - 1.0
}

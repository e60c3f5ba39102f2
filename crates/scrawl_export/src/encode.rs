//! PNG encoding

use scrawl_raster::Framebuffer;

/// Encode a framebuffer as a PNG byte stream (RGBA, 8-bit).
pub fn encode_png(frame: &Framebuffer) -> Result<Vec<u8>, png::EncodingError> {
    let mut bytes = Vec::new();

    let mut encoder = png::Encoder::new(&mut bytes, frame.width(), frame.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(frame.data())?;
    writer.finish()?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrawl_paint::Color;

    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_produces_png_stream() {
        let frame = Framebuffer::filled(16, 16, Color::WHITE);
        let bytes = encode_png(&frame).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_round_trips_pixels() {
        let mut frame = Framebuffer::filled(8, 4, Color::WHITE);
        frame.blend_pixel(3, 2, Color::BLACK, 1.0);
        let bytes = encode_png(&frame).unwrap();

        let decoder = png::Decoder::new(bytes.as_slice());
        let mut reader = decoder.read_info().unwrap();
        let mut decoded = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut decoded).unwrap();

        assert_eq!(info.width, 8);
        assert_eq!(info.height, 4);
        assert_eq!(&decoded[..info.buffer_size()], frame.data());
    }
}

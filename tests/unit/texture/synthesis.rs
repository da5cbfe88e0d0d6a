//! Tests for per-tile animated texture synthesis

#[cfg(test)]
mod tests {
    use cinetile::CinetileError;
    use cinetile::show::display::DisplayId;
    use cinetile::show::properties::ShowProperties;
    use cinetile::spatial::tiles::TilePosition;
    use cinetile::texture::synthesis::{scale_frames, synthesize, texture_name};
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
    const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

    fn solid(width: u32, height: u32, colour: Rgb<u8>) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, colour))
    }

    fn split(width: u32, height: u32, left: Rgb<u8>, right: Rgb<u8>) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, _| {
            if x < width / 2 { left } else { right }
        }))
    }

    fn props(blocks_x: u32, blocks_y: u32) -> ShowProperties {
        ShowProperties::new(DisplayId::ScreenAlpha, "Test", 7, blocks_x, blocks_y).unwrap()
    }

    // Tests texture names combine display and tile coordinates
    // Verified by swapping x and y in the name
    #[test]
    fn test_texture_name() {
        assert_eq!(
            texture_name(DisplayId::ScreenBravo, TilePosition::new(2, 1)),
            "screen_bravo_2_1"
        );
    }

    // Tests one strip per tile, one cell per frame
    // Verified by producing a single strip for the whole show
    #[test]
    fn test_strip_dimensions() {
        let frames = [solid(32, 16, RED), solid(32, 16, GREEN), solid(32, 16, BLUE)];
        let show = synthesize(&props(2, 0), &frames).unwrap();

        assert_eq!(show.textures.len(), 2);
        for texture in &show.textures {
            assert_eq!(texture.image.dimensions(), (16, 48));
            assert_eq!(texture.metadata.animation.frametime, 7);
        }
        assert_eq!(show.textures[0].name, "screen_alpha_0_0");
        assert_eq!(show.textures[1].name, "screen_alpha_1_0");
        assert_eq!(show.textures[1].position, TilePosition::new(1, 0));
    }

    // Tests frames are stacked bottom-up in order
    // Verified by stacking the first frame at the top
    #[test]
    fn test_frames_stack_bottom_up() {
        let frames = [solid(16, 16, RED), solid(16, 16, GREEN), solid(16, 16, BLUE)];
        let show = synthesize(&props(1, 0), &frames).unwrap();
        let strip = &show.textures[0].image;

        assert_eq!(strip.get_pixel(0, 0), &BLUE);
        assert_eq!(strip.get_pixel(8, 20), &GREEN);
        assert_eq!(strip.get_pixel(15, 47), &RED);
    }

    // Tests each tile receives its own region of every frame
    // Verified by cropping every tile at the origin
    #[test]
    fn test_tiles_crop_their_region() {
        let frames = [split(32, 16, RED, GREEN)];
        let show = synthesize(&props(2, 0), &frames).unwrap();

        assert!(show.textures[0].image.pixels().all(|p| *p == RED));
        assert!(show.textures[1].image.pixels().all(|p| *p == GREEN));
    }

    // Tests the secondary axis is fixed in the returned properties
    // Verified by returning the configured properties unchanged
    #[test]
    fn test_properties_fixed() {
        let frames = [solid(64, 64, RED), solid(64, 40, RED)];
        let show = synthesize(&props(2, 0), &frames).unwrap();

        assert_eq!(show.properties.blocks_x(), 2);
        assert_eq!(show.properties.blocks_y(), 1);
        assert_eq!(show.properties.display(), DisplayId::ScreenAlpha);
        assert_eq!(show.textures.len(), 2);
    }

    // Tests frames of different sizes are scaled onto one grid
    // Verified by skipping the resize step
    #[test]
    fn test_mixed_frame_sizes() {
        let frames = [solid(100, 50, RED), solid(200, 100, GREEN)];
        let (scaled, layout) = scale_frames(&props(2, 0), &frames).unwrap();

        assert_eq!(scaled.len(), 2);
        assert!(scaled.iter().all(|frame| frame.dimensions() == (32, 16)));
        assert_eq!((layout.blocks_x(), layout.blocks_y()), (2, 1));
    }

    // Tests transparency is dropped from the output
    // Verified by keeping the alpha channel
    #[test]
    fn test_alpha_dropped() {
        let translucent = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            16,
            16,
            Rgba([10, 20, 30, 0]),
        ));
        let show = synthesize(&props(1, 1), &[translucent]).unwrap();
        assert_eq!(show.textures[0].image.get_pixel(3, 3), &Rgb([10, 20, 30]));
    }

    // Tests a show without frames produces no artifacts
    // Verified by returning an empty texture list
    #[test]
    fn test_no_frames_rejected() {
        assert!(matches!(
            synthesize(&props(2, 0), &[]),
            Err(CinetileError::DegenerateInput { .. })
        ));
    }
}

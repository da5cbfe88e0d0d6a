//! Tests for command-line parsing and batch show processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use cinetile::CinetileError;
    use cinetile::io::cli::{Cli, Command, ShowProcessor, init_logging};
    use cinetile::io::configuration::{BLOCKS_X_MAX, BLOCKS_Y_MAX};
    use cinetile::show::display::DisplayId;
    use cinetile::show::properties::ShowProperties;
    use cinetile::show::registry::ShowRegistry;
    use image::{Rgb, RgbImage};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn add_show(source: &Path, name: &str, meta: &str, frames: &[(u32, u32)]) -> PathBuf {
        let dir = source.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("meta.json"), meta).unwrap();
        for (index, (width, height)) in frames.iter().enumerate() {
            let shade = (index * 40) as u8;
            RgbImage::from_pixel(*width, *height, Rgb([shade, 0, 0]))
                .save(dir.join(format!("frame_{index:03}.png")))
                .unwrap();
        }
        dir
    }

    // Tests generate arguments and defaults
    // Verified by making quiet default to true
    #[test]
    fn test_parse_generate() {
        let cli = Cli::parse_from(["cinetile", "generate", "shows", "assets"]);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.log_level(), "warn");
        match cli.command {
            Command::Generate {
                source,
                assets,
                quiet,
            } => {
                assert_eq!(source, PathBuf::from("shows"));
                assert_eq!(assets, PathBuf::from("assets"));
                assert!(!quiet);
            }
            Command::States { .. } => unreachable!("parsed the wrong subcommand"),
        }
    }

    // Tests verbosity is counted before and after the subcommand
    // Verified by making verbose a plain flag
    #[test]
    fn test_verbosity() {
        let cli = Cli::parse_from(["cinetile", "-vv", "generate", "a", "b", "--quiet"]);
        assert_eq!(cli.log_level(), "debug");

        let cli = Cli::parse_from(["cinetile", "generate", "a", "b", "-v"]);
        assert_eq!(cli.log_level(), "info");

        let cli = Cli::parse_from(["cinetile", "states", "-vvvv"]);
        assert_eq!(cli.log_level(), "trace");
    }

    // Tests the state listing defaults to the largest grid
    // Verified by defaulting both bounds to one
    #[test]
    fn test_parse_states() {
        let cli = Cli::parse_from(["cinetile", "states"]);
        assert!(matches!(
            cli.command,
            Command::States { blocks_x, blocks_y } if blocks_x == BLOCKS_X_MAX && blocks_y == BLOCKS_Y_MAX
        ));

        let cli = Cli::parse_from(["cinetile", "states", "--blocks-x", "2", "--blocks-y", "1"]);
        assert!(cli.run().is_ok());
    }

    // Tests the state listing refuses grids beyond the per-axis maximum
    // Verified by accepting any column count
    #[test]
    fn test_states_bounds() {
        let too_wide = (BLOCKS_X_MAX + 1).to_string();
        let too_tall = (BLOCKS_Y_MAX + 1).to_string();
        assert!(Cli::try_parse_from(["cinetile", "states", "--blocks-x", &too_wide]).is_err());
        assert!(Cli::try_parse_from(["cinetile", "states", "--blocks-y", &too_tall]).is_err());
        assert!(Cli::try_parse_from(["cinetile", "states", "--blocks-x", "100000"]).is_err());

        let cli = Cli::parse_from(["cinetile", "states", "--blocks-x", "0", "--blocks-y", "6"]);
        assert!(matches!(
            cli.command,
            Command::States { blocks_x: 0, blocks_y: 6 }
        ));
    }

    // Tests installing logging twice keeps the first subscriber
    // Verified by failing on the second installation
    #[test]
    fn test_init_logging_twice() {
        init_logging("warn");
        init_logging("debug");
    }

    // Tests a subcommand is required
    // Verified by making the subcommand optional
    #[test]
    fn test_missing_subcommand() {
        assert!(Cli::try_parse_from(["cinetile"]).is_err());
        assert!(Cli::try_parse_from(["cinetile", "generate", "only_source"]).is_err());
    }

    // Tests a batch writes every artifact of a valid show
    // Verified by skipping the timing metadata export
    #[test]
    fn test_process_valid_show() {
        let source = TempDir::new().unwrap();
        let assets = TempDir::new().unwrap();
        add_show(
            source.path(),
            "intro",
            r#"{"showName":"Intro","frameTime":3,"blocksX":2,"assignToBlock":"screen_alpha"}"#,
            &[(100, 50), (100, 50), (100, 50)],
        );

        let report = ShowProcessor::new(source.path().into(), assets.path().into(), false)
            .process()
            .unwrap();
        assert_eq!(report.generated, [DisplayId::ScreenAlpha]);
        assert!(report.rejected.is_empty());

        let textures = assets.path().join("textures/block");
        for tile in ["screen_alpha_0_0", "screen_alpha_1_0"] {
            let strip = image::open(textures.join(format!("{tile}.png"))).unwrap();
            assert_eq!((strip.width(), strip.height()), (16, 48));
            let metadata = fs::read_to_string(textures.join(format!("{tile}.png.mcmeta"))).unwrap();
            assert_eq!(metadata, r#"{"animation":{"frametime":3}}"#);
        }
        assert!(!textures.join("screen_alpha_0_1.png").exists());

        let adjusted = ShowProperties::load(&assets.path().join("screen_alpha.json")).unwrap();
        assert_eq!((adjusted.blocks_x(), adjusted.blocks_y()), (2, 1));
        assert_eq!(adjusted.show_name(), "Intro");

        let registry = ShowRegistry::load(assets.path()).unwrap();
        assert_eq!(registry.get(DisplayId::ScreenAlpha), Some(&adjusted));
    }

    // Tests invalid shows are rejected without stopping the batch
    // Verified by aborting on the first rejected show
    #[test]
    fn test_process_rejects_show_locally() {
        let source = TempDir::new().unwrap();
        let assets = TempDir::new().unwrap();
        add_show(
            source.path(),
            "a_good",
            r#"{"blocksY":1,"assignToBlock":"screen_bravo"}"#,
            &[(32, 16)],
        );
        let too_wide = add_show(
            source.path(),
            "b_too_wide",
            r#"{"blocksX":9,"assignToBlock":"screen_charlie"}"#,
            &[(32, 16)],
        );
        add_show(
            source.path(),
            "c_duplicate",
            r#"{"blocksX":1,"assignToBlock":"screen_bravo"}"#,
            &[(16, 16)],
        );
        add_show(
            source.path(),
            "d_too_flat",
            r#"{"blocksX":2,"assignToBlock":"screen_delta"}"#,
            &[(100, 4)],
        );
        add_show(
            source.path(),
            "e_no_frames",
            r#"{"blocksX":2,"assignToBlock":"screen_echo"}"#,
            &[],
        );
        add_show(
            source.path(),
            "f_good",
            r#"{"blocksX":1,"blocksY":1,"assignToBlock":"screen_foxtrot"}"#,
            &[(20, 20)],
        );

        let report = ShowProcessor::new(source.path().into(), assets.path().into(), false)
            .process()
            .unwrap();

        assert_eq!(
            report.generated,
            [DisplayId::ScreenBravo, DisplayId::ScreenFoxtrot]
        );
        assert_eq!(report.rejected.len(), 4);
        assert_eq!(report.rejected[0].source, too_wide);
        assert!(report.rejected[0].reason.contains("blocksX"));

        assert!(!assets.path().join("screen_charlie.json").exists());
        assert!(!assets.path().join("screen_delta.json").exists());

        let index = fs::read_to_string(assets.path().join("shows.json")).unwrap();
        let listed: Vec<DisplayId> = serde_json::from_str(&index).unwrap();
        assert_eq!(listed, report.generated);
    }

    // Tests a show directory without configuration aborts the run
    // Verified by treating missing configuration as a rejected show
    #[test]
    fn test_missing_configuration_is_fatal() {
        let source = TempDir::new().unwrap();
        let assets = TempDir::new().unwrap();
        fs::create_dir(source.path().join("unconfigured")).unwrap();

        let result =
            ShowProcessor::new(source.path().into(), assets.path().into(), false).process();
        assert!(matches!(result, Err(CinetileError::FileSystem { .. })));
    }

    // Tests a missing source directory aborts the run
    // Verified by returning an empty report
    #[test]
    fn test_missing_source_is_fatal() {
        let assets = TempDir::new().unwrap();
        let result = ShowProcessor::new(
            assets.path().join("absent"),
            assets.path().into(),
            true,
        )
        .process();
        assert!(result.is_err());
    }

    // Tests an empty source writes an empty index
    // Verified by skipping the index for empty batches
    #[test]
    fn test_empty_source() {
        let source = TempDir::new().unwrap();
        let assets = TempDir::new().unwrap();
        fs::write(source.path().join("stray.txt"), "ignored").unwrap();

        let report = ShowProcessor::new(source.path().into(), assets.path().into(), true)
            .process()
            .unwrap();
        assert!(report.generated.is_empty());
        assert!(ShowRegistry::load(assets.path()).unwrap().is_empty());
    }
}

//! CLI command parsing and execution tests.
//!
//! Tests cover argument parsing (via clap `try_parse_from`), the commands
//! that need no network, and error paths.

// ============================================================================
// Clap argument parsing
// ============================================================================

mod clap_parsing {
    use std::path::PathBuf;

    use clap::Parser;
    use folio_bench::Regime;
    use folio_cli::{Cli, Commands};
    use folio_topology::Theme;

    // --- Route ---

    #[test]
    fn test_parse_route() {
        let cli = Cli::try_parse_from(["folio", "route", "--from", "0", "--to", "10"]).unwrap();
        match cli.command {
            Commands::Route { from, to } => {
                assert_eq!(from, 0);
                assert_eq!(to, 10);
            }
            _ => panic!("Expected Route command"),
        }
    }

    #[test]
    fn test_parse_route_short_flags() {
        let cli = Cli::try_parse_from(["folio", "route", "-f", "5", "-t", "9"]).unwrap();
        assert!(matches!(cli.command, Commands::Route { from: 5, to: 9 }));
    }

    #[test]
    fn test_parse_route_missing_target() {
        let result = Cli::try_parse_from(["folio", "route", "--from", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_route_rejects_negative_qubit() {
        let result = Cli::try_parse_from(["folio", "route", "--from", "-1", "--to", "3"]);
        assert!(result.is_err());
    }

    // --- Topology ---

    #[test]
    fn test_parse_topology() {
        let cli = Cli::try_parse_from(["folio", "topology"]).unwrap();
        assert!(matches!(cli.command, Commands::Topology));
    }

    // --- Bench ---

    #[test]
    fn test_parse_bench_defaults() {
        let cli = Cli::try_parse_from(["folio", "bench"]).unwrap();
        match cli.command {
            Commands::Bench {
                regime, threshold, ..
            } => {
                assert!(regime.is_none());
                assert!((threshold - 0.5).abs() < f64::EPSILON);
            }
            _ => panic!("Expected Bench command"),
        }
    }

    #[test]
    fn test_parse_bench_all_options() {
        let cli = Cli::try_parse_from([
            "folio",
            "bench",
            "--data",
            "results.json",
            "--regime",
            "Excellent",
            "--threshold",
            "2.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Bench {
                data,
                regime,
                threshold,
            } => {
                assert_eq!(data, Some(PathBuf::from("results.json")));
                assert_eq!(regime, Some(Regime::Excellent));
                assert!((threshold - 2.5).abs() < f64::EPSILON);
            }
            _ => panic!("Expected Bench command"),
        }
    }

    #[test]
    fn test_parse_bench_unknown_regime() {
        let result = Cli::try_parse_from(["folio", "bench", "--regime", "awful"]);
        assert!(result.is_err());
    }

    // --- Export ---

    #[test]
    fn test_parse_export() {
        let cli = Cli::try_parse_from(["folio", "export", "--out", "site", "--theme", "light"])
            .unwrap();
        match cli.command {
            Commands::Export { out, theme, .. } => {
                assert_eq!(out, PathBuf::from("site"));
                assert_eq!(theme, Theme::Light);
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_parse_export_requires_out() {
        let result = Cli::try_parse_from(["folio", "export"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_export_unknown_theme() {
        let result = Cli::try_parse_from(["folio", "export", "-o", "site", "--theme", "sepia"]);
        assert!(result.is_err());
    }

    // --- Serve ---

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["folio", "serve"]).unwrap();
        match cli.command {
            Commands::Serve {
                bind,
                data,
                capacity,
                ..
            } => {
                assert_eq!(bind.port(), 3000);
                assert!(data.is_none());
                assert_eq!(capacity, 2);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_parse_serve_bind_and_capacity() {
        let cli = Cli::try_parse_from([
            "folio",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--capacity",
            "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve { bind, capacity, .. } => {
                assert_eq!(bind.to_string(), "0.0.0.0:8080");
                assert_eq!(capacity, 3);
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_parse_serve_capacity_out_of_range() {
        let result = Cli::try_parse_from(["folio", "serve", "--capacity", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_serve_bad_address() {
        let result = Cli::try_parse_from(["folio", "serve", "--bind", "localhost"]);
        assert!(result.is_err());
    }

    // --- Version and verbosity ---

    #[test]
    fn test_parse_version() {
        let cli = Cli::try_parse_from(["folio", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_verbosity_maps_to_filter() {
        let cli = Cli::try_parse_from(["folio", "version"]).unwrap();
        assert_eq!(cli.log_filter(), "warn");

        let cli = Cli::try_parse_from(["folio", "-v", "version"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert_eq!(cli.log_filter(), "info");

        let cli = Cli::try_parse_from(["folio", "-vv", "version"]).unwrap();
        assert_eq!(cli.log_filter(), "debug");

        let cli = Cli::try_parse_from(["folio", "topology", "-vvvv"]).unwrap();
        assert_eq!(cli.log_filter(), "trace");
    }

    // --- Error cases ---

    #[test]
    fn test_no_subcommand() {
        let result = Cli::try_parse_from(["folio"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_subcommand() {
        let result = Cli::try_parse_from(["folio", "foobar"]);
        assert!(result.is_err());
    }
}

// ============================================================================
// Command execution
// ============================================================================

mod commands {
    use std::fs;

    use folio_cli::commands::route::RouteStatus;
    use folio_cli::commands::{bench, export, route};
    use folio_topology::Theme;

    #[test]
    fn test_route_between_known_qubits() {
        let status = route::execute(0, 10).unwrap();
        assert!(matches!(status, RouteStatus::NeedsSwaps { swaps: 3, .. }));
        assert_eq!(route::execute(5, 9).unwrap(), RouteStatus::Adjacent);
    }

    #[test]
    fn test_route_to_same_qubit() {
        assert_eq!(route::execute(3, 3).unwrap(), RouteStatus::SameQubit);
    }

    #[test]
    fn test_route_unknown_qubit_fails() {
        let err = route::execute(0, 99).unwrap_err().to_string();
        assert!(err.contains("Q99"));
    }

    #[test]
    fn test_bench_embedded_dataset() {
        assert!(bench::execute(None, None, 0.5).is_ok());
    }

    #[test]
    fn test_bench_rejects_non_finite_threshold() {
        let err = bench::execute(None, None, f64::NAN).unwrap_err().to_string();
        assert!(err.contains("finite"));
    }

    #[test]
    fn test_bench_missing_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = bench::load_dataset(Some(&path)).unwrap_err().to_string();
        assert!(err.contains("Failed to load benchmark data"));
    }

    #[test]
    fn test_bench_malformed_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"metadata": 42}"#).unwrap();
        assert!(bench::load_dataset(Some(&path)).is_err());
    }

    #[test]
    fn test_export_writes_site() {
        let dir = tempfile::tempdir().unwrap();
        let written = export::execute(dir.path(), Theme::Light, None).unwrap();
        assert_eq!(written.len(), 3);

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains(r#"href="/blog/circuit-matching-problem""#));
        assert!(index.contains("background: #ffffff"));

        let post = fs::read_to_string(
            dir.path()
                .join("blog")
                .join("circuit-matching-problem")
                .join("index.html"),
        )
        .unwrap();
        assert!(post.contains("Noise-Aware Circuit Matching"));
        assert!(post.contains("Key Findings"));

        let not_found = fs::read_to_string(dir.path().join("404.html")).unwrap();
        assert!(not_found.contains("Post not found"));
    }

    #[test]
    fn test_export_dark_theme() {
        let dir = tempfile::tempdir().unwrap();
        export::execute(dir.path(), Theme::Dark, None).unwrap();
        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(!index.contains("background: #ffffff"));
    }
}

use super::*;

#[test]
fn parses_geocode_command() {
    let cli = Cli::try_parse_from(["radiusos", "geocode", "facilities.csv"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Geocode {
            ref input,
            output: None,
            markers: None,
        } if input == &PathBuf::from("facilities.csv")
    ));
}

#[test]
fn parses_geocode_outputs() {
    let cli = Cli::try_parse_from([
        "radiusos",
        "geocode",
        "facilities.csv",
        "--output",
        "out.csv",
        "--markers",
        "map.json",
    ])
    .unwrap();

    let Commands::Geocode {
        output, markers, ..
    } = cli.command
    else {
        panic!("expected geocode command");
    };
    assert_eq!(output, Some(PathBuf::from("out.csv")));
    assert_eq!(markers, Some(PathBuf::from("map.json")));
}

#[test]
fn parses_search_with_defaults() {
    let cli = Cli::try_parse_from([
        "radiusos",
        "search",
        "facilities.csv",
        "--address",
        "Austin, TX",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Commands::Search {
            ref address,
            radius: None,
            output: None,
            markers: None,
            skip_geocode: false,
            ..
        } if address == "Austin, TX"
    ));
}

#[test]
fn parses_search_short_flags() {
    let cli = Cli::try_parse_from([
        "radiusos",
        "search",
        "facilities.csv",
        "-a",
        "Austin, TX",
        "-r",
        "12.5",
        "--skip-geocode",
    ])
    .unwrap();

    let Commands::Search {
        radius,
        skip_geocode,
        ..
    } = cli.command
    else {
        panic!("expected search command");
    };
    assert_eq!(radius, Some(12.5));
    assert!(skip_geocode);
}

#[test]
fn search_requires_address() {
    assert!(Cli::try_parse_from(["radiusos", "search", "facilities.csv"]).is_err());
}

#[test]
fn search_rejects_non_positive_radius() {
    for radius in ["0", "-5", "NaN", "wide"] {
        let result = Cli::try_parse_from([
            "radiusos",
            "search",
            "facilities.csv",
            "--address",
            "Austin",
            "--radius",
            radius,
        ]);
        assert!(result.is_err(), "radius {radius} should be rejected");
    }
}

#[test]
fn parses_shell_command() {
    let cli = Cli::try_parse_from(["radiusos", "shell", "facilities.csv"]).unwrap();
    assert!(matches!(cli.command, Commands::Shell { .. }));
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["radiusos"]).is_err());
}

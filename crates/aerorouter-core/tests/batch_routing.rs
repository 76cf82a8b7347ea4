// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz
//
// End-to-end routing over reference tables written to a temp directory.

use aerorouter_core::query::QueryParser;
use aerorouter_core::reference::ReferenceData;
use aerorouter_core::{
    DataError, EntityKind, Query, ReferenceTables, RouteError, Router, RouterConfig,
};
use std::fs;
use tempfile::TempDir;

const AIRCRAFT_CSV: &str = "\
code,type,units,manufacturer,range
A319,jet,metric,Airbus,3750
F50,turboprop,metric,Fokker,2055
MD11,jet,imperial,McDonnell Douglas,12670
C172,piston,metric,Cessna,100
F50,turboprop,metric,Fokker,9999
";

const AIRPORT_CSV: &str = "\
id,name,city,country,iata,icao,latitude,longitude,altitude,timezone,dst,tz
507,Heathrow,London,United Kingdom,LHR,EGLL,51.4775,-0.461389,83,0,E,Europe/London
580,Schiphol,Amsterdam,Netherlands,AMS,EHAM,52.308613,4.763889,-11,1,E,Europe/Amsterdam
599,Dublin,Dublin,Ireland,DUB,EIDW,53.421333,-6.270075,242,0,E,Europe/Dublin
1382,Charles De Gaulle,Paris,France,CDG,LFPG,49.012779,2.55,392,1,E,Europe/Paris
340,Frankfurt Main,Frankfurt,Germany,FRA,EDDF,50.026421,8.543125,364,1,E,Europe/Berlin
3797,John F Kennedy Intl,New York,United States,JFK,KJFK,40.639751,-73.778925,13,-5,A,America/New_York
3361,Sydney Intl,Sydney,Australia,SYD,YSSY,-33.946111,151.177222,21,10,O,Australia/Sydney
9001,Lost City,Poseidonia,Atlantis,ZZZ,ZZZZ,31.0,-24.0,0,0,N,Atlantic/Atlantis
";

const CURRENCY_CSV: &str = "\
name,name_fr,ISO3166-1-Alpha-2,currency_alphabetic_code,currency_name
Australia,Australie,AU,AUD,Australian Dollar
France,France,FR,EUR,Euro
Germany,Allemagne,DE,EUR,Euro
Ireland,Irlande,IE,EUR,Euro
NETHERLANDS,Pays-Bas,NL,EUR,Euro
United Kingdom,Royaume-Uni,GB,GBP,Pound Sterling
United States,États-Unis,US,USD,US Dollar
";

const RATES_CSV: &str = "\
name,code,toEuro,fromEuro
Euro,EUR,1,1
British Pound,GBP,1.4029,0.7128
US Dollar,USD,0.843,1.1862
Australian Dollar,AUD,0.5865,1.705
";

struct Fixture {
    _dir: TempDir,
    config: RouterConfig,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path();
        fs::write(root.join("aircraft.csv"), AIRCRAFT_CSV).unwrap();
        fs::write(root.join("airport.csv"), AIRPORT_CSV).unwrap();
        fs::write(root.join("countrycurrency.csv"), CURRENCY_CSV).unwrap();
        fs::write(root.join("currencyrates.csv"), RATES_CSV).unwrap();

        let config = RouterConfig::load(root).unwrap();
        Self { _dir: dir, config }
    }

    fn tables(&self) -> ReferenceTables {
        ReferenceTables::load(&self.config).unwrap()
    }
}

#[test]
fn test_tables_load_first_row_wins() {
    let fixture = Fixture::new();
    let tables = fixture.tables();

    assert_eq!(tables.aircraft_count(), 4);
    assert_eq!(tables.airport_count(), 8);
    assert_eq!(tables.lookup_aircraft("F50").unwrap().range_raw, 2055.0);
    assert_eq!(tables.lookup_currency_for_country("Netherlands"), Some("EUR"));
}

#[test]
fn test_missing_table_is_reported() {
    let fixture = Fixture::new();
    fs::remove_file(fixture.config.rates_path()).unwrap();
    let err = ReferenceTables::load(&fixture.config).unwrap_err();
    assert!(matches!(err, DataError::MissingFile(_)));
}

#[test]
fn test_non_finite_rows_are_not_loaded() {
    let fixture = Fixture::new();
    let mut airports = AIRPORT_CSV.to_string();
    airports.push_str("9002,Bravo,Nowhere,Ireland,BBB,XBBB,NaN,1.0,0,0,E,Europe/Dublin\n");
    fs::write(fixture.config.airport_path(), airports).unwrap();
    let mut aircraft = AIRCRAFT_CSV.to_string();
    aircraft.push_str("GHOST,jet,metric,Nobody,inf\n");
    fs::write(fixture.config.aircraft_path(), aircraft).unwrap();

    let tables = fixture.tables();
    assert_eq!(tables.airport_count(), 8);
    assert!(tables.lookup_airport("BBB").is_none());
    assert!(tables.lookup_aircraft("GHOST").is_none());

    let mut router = Router::new(&tables);
    let result = router.plan(&Query::new("DUB", ["AMS", "BBB", "FRA", "LHR"], "MD11"));
    assert_eq!(
        result,
        Err(RouteError::NotFound {
            kind: EntityKind::Airport,
            code: "BBB".to_string()
        })
    );
}

#[test]
fn test_aircraft_range_regressions() {
    let fixture = Fixture::new();
    let tables = fixture.tables();
    let mut router = Router::new(&tables);

    // Warm the cache through a real query, then read entities back out
    router
        .plan(&Query::new("DUB", ["AMS", "CDG", "FRA", "LHR"], "F50"))
        .unwrap();
    router
        .plan(&Query::new("DUB", ["AMS", "CDG", "FRA", "LHR"], "MD11"))
        .unwrap();

    let f50 = router.cache().aircraft("F50").unwrap();
    assert_eq!(f50.range_km, 2055.0);

    let md11 = router.cache().aircraft("MD11").unwrap();
    assert!((md11.range_km - 20390.3378).abs() < 1e-9);
}

#[test]
fn test_schiphol_resolution() {
    let fixture = Fixture::new();
    let tables = fixture.tables();
    let mut router = Router::new(&tables);

    router.distance_between("AMS", "DUB").unwrap();
    let ams = router.cache().airport("AMS").unwrap();

    assert_eq!(ams.name, "Schiphol");
    assert_eq!(ams.latitude, 52.308613);
    assert_eq!(ams.longitude, 4.763889);
    assert_eq!(ams.country, "Netherlands");
    assert_eq!(ams.currency_code, "EUR");
    assert_eq!(ams.to_euro_rate, 1.0);
}

#[test]
fn test_schiphol_dublin_distance() {
    let fixture = Fixture::new();
    let tables = fixture.tables();
    let mut router = Router::new(&tables);

    let d = router.distance_between("AMS", "DUB").unwrap();
    assert!((d - 750.3717994608915).abs() < 1e-6, "got {}", d);
}

#[test]
fn test_european_tour() {
    let fixture = Fixture::new();
    let tables = fixture.tables();
    let mut router = Router::new(&tables);

    let report = router
        .plan(&Query::new("DUB", ["AMS", "CDG", "FRA", "LHR"], "MD11"))
        .unwrap();

    assert_eq!(report.route_codes(), vec!["DUB", "LHR", "CDG", "FRA", "AMS", "DUB"]);
    assert!((report.total_cost_eur - 2500.27).abs() < 0.01);
    assert_eq!(report.evaluated, 24);
    assert_eq!(report.feasible, 24);

    // LHR departs in sterling
    let from_lhr = &report.legs[1];
    assert_eq!(from_lhr.from, "LHR");
    assert!((from_lhr.cost_eur - from_lhr.distance_km * 1.4029).abs() < 1e-9);
}

#[test]
fn test_out_of_range_is_not_a_crash() {
    let fixture = Fixture::new();
    let tables = fixture.tables();
    let mut router = Router::new(&tables);

    let result = router.plan(&Query::new("DUB", ["AMS", "JFK", "SYD", "LHR"], "F50"));
    assert_eq!(
        result,
        Err(RouteError::NoFeasibleRoute {
            home: "DUB".to_string(),
            aircraft: "F50".to_string()
        })
    );
}

#[test]
fn test_batch_from_file() {
    let fixture = Fixture::new();
    let tables = fixture.tables();
    let queries_path = fixture.config.data_dir.join("test.csv");
    fs::write(
        &queries_path,
        "DUB,AMS,XXX,FRA,LHR,MD11\n\
         DUB,AMS,JFK,SYD,LHR,F50\n\
         DUB,AMS,777\n\
         DUB,AMS,ZZZ,FRA,LHR,MD11\n\
         DUB,AMS,CDG,FRA,LHR,B747\n\
         DUB,AMS,CDG,FRA,LHR,MD11\n",
    )
    .unwrap();

    let queries = QueryParser::parse_file(&queries_path).unwrap();
    let mut router = Router::new(&tables);
    let outcomes = router.run_batch(queries);

    assert_eq!(outcomes.len(), 6);
    assert_eq!(
        outcomes[0].result,
        Err(RouteError::NotFound {
            kind: EntityKind::Airport,
            code: "XXX".to_string()
        })
    );
    assert!(matches!(
        outcomes[1].result,
        Err(RouteError::NoFeasibleRoute { .. })
    ));
    assert!(matches!(
        outcomes[2].result,
        Err(RouteError::MalformedQuery { row: 3, .. })
    ));
    assert!(outcomes[2].query.is_none());
    assert!(matches!(
        outcomes[3].result,
        Err(RouteError::IncompleteAirport { ref code, .. }) if code == "ZZZ"
    ));
    assert!(matches!(
        outcomes[4].result,
        Err(RouteError::NotFound {
            kind: EntityKind::Aircraft,
            ..
        })
    ));

    let last = outcomes[5].result.as_ref().unwrap();
    assert_eq!(last.home.code, "DUB");
    assert!(router.cache().airport("ZZZ").is_none());
    assert!(router.cache().airport("XXX").is_none());
}

use cheerpost_core::*;

fn open(config: &Config) -> LocalCounter<FileStorage, PageNavigator> {
    let storage = FileStorage::open(&config.storage_file).unwrap();
    LocalCounter::new(storage, PageNavigator::new("/src/modules/posts/index.html"))
}

#[test]
fn counter_starts_at_zero() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_root(dir.path()).unwrap();

    assert_eq!(open(&config).get_poops().unwrap(), 0);
}

#[test]
fn counter_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_root(dir.path()).unwrap();

    let mut counter = open(&config);
    counter.save_poops(3).unwrap();
    counter.save_poops(11).unwrap();
    drop(counter);

    assert_eq!(open(&config).get_poops().unwrap(), 11);
}

#[test]
fn tampered_value_reads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_root(dir.path()).unwrap();

    let mut storage = FileStorage::open(&config.storage_file).unwrap();
    storage.set_item(POOPS_KEY, "NaN").unwrap();
    drop(storage);

    assert_eq!(open(&config).get_poops().unwrap(), 0);
}

#[test]
fn round_trip_for_non_negative_values() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_root(dir.path()).unwrap();
    let mut counter = open(&config);

    for n in [0, 1, 2, 10, 255, 65_536, 9_007_199_254_740_991] {
        counter.save_poops(n).unwrap();
        assert_eq!(counter.get_poops().unwrap(), n);
    }
}

#[test]
fn go_to_navigates_relative_to_current_page() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_root(dir.path()).unwrap();
    let mut counter = open(&config);

    counter.go_to("../../../index.html").unwrap();
    assert_eq!(counter.current_path(), "/index.html");

    counter.go_to("/src/modules/stats/").unwrap();
    assert_eq!(counter.current_path(), "/src/modules/stats/");
    assert!(counter.go_to("").is_err());
}

#[test]
fn hand_edited_number_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_root(dir.path()).unwrap();
    std::fs::write(&config.storage_file, r#"{"user_poops": 5}"#).unwrap();

    assert_eq!(open(&config).get_poops().unwrap(), 5);
}

#[test]
fn unusable_storage_file_reads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_root(dir.path()).unwrap();
    std::fs::write(&config.storage_file, r#""user_poops""#).unwrap();

    let mut counter = open(&config);
    assert_eq!(counter.get_poops().unwrap(), 0);

    counter.save_poops(4).unwrap();
    assert_eq!(open(&config).get_poops().unwrap(), 4);
}

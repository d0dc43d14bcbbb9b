//! Tests for partitioning, counters, and run idempotence

use super::{create_named_record, StubProvider, StubReader};
use crate::attribute::{AttributeEntry, AttributeMap};
use crate::filter::FilterSet;
use crate::job::{Job, JobState};
use crate::record::Record;
use crate::value::Value;

fn create_job(names: &[&str], filters: FilterSet) -> Job {
    let records = names.iter().map(|n| create_named_record(n)).collect();
    Job::new(
        Box::new(StubProvider::new("")),
        Box::new(StubReader::new(records)),
        filters,
        AttributeMap::new(),
    )
}

fn name_matches(prefix: &'static str) -> impl Fn(&Record) -> bool {
    move |r: &Record| {
        r.get("name")
            .and_then(Value::as_str)
            .is_some_and(|name| name.starts_with(prefix))
    }
}

#[test]
fn test_records_total_received_count() {
    let mut job = create_job(&["A", "B"], FilterSet::new());

    job.process().unwrap();
    assert_eq!(job.total_records(), 2);
    assert_eq!(job.state(), JobState::Done);
}

#[test]
fn test_partitions_records_by_filter() {
    let mut filters = FilterSet::new();
    filters.insert("alpha", name_matches("A"));
    let mut job = create_job(&["A", "B"], filters);

    job.process().unwrap();
    assert_eq!(job.partition("alpha").len(), 1);
    assert_eq!(job.partition("alpha")[0].get("name"), Some(&Value::from("A")));
}

#[test]
fn test_keeps_unfiltered_records() {
    let mut filters = FilterSet::new();
    filters.insert("zeta", name_matches("Z"));
    let mut job = create_job(&["A"], filters);

    job.process().unwrap();
    assert_eq!(job.unfiltered_records().len(), 1);
    assert!(job.all_records().is_empty());
}

#[test]
fn test_all_records_holds_only_matches() {
    let mut filters = FilterSet::new();
    filters.insert("alpha", name_matches("A"));
    let mut job = create_job(&["A", "Z"], filters);

    job.process().unwrap();

    // Every tested record is accounted for exactly once across the
    // matched and unmatched views
    assert_eq!(job.all_records().len(), 1);
    assert_eq!(job.unfiltered_records().len(), 1);
    assert_eq!(
        job.all_records().len() + job.unfiltered_records().len(),
        job.total_records()
    );
}

#[test]
fn test_multi_match_is_not_exclusive() {
    let mut filters = FilterSet::new();
    filters.insert("alpha", name_matches("A"));
    filters.insert("has_name", |r: &Record| r.contains("name"));
    let mut job = create_job(&["A", "Z"], filters);

    job.process().unwrap();

    // "A" satisfies both filters: both buckets hold it, all_records once
    assert_eq!(job.partition("alpha").len(), 1);
    assert_eq!(job.partition("has_name").len(), 2);
    assert_eq!(job.all_records().len(), 2);
    assert!(job.unfiltered_records().is_empty());
}

#[test]
fn test_no_filters_means_everything_is_all() {
    let mut job = create_job(&["A", "B"], FilterSet::new());

    job.process().unwrap();
    assert_eq!(job.all_records().len(), 2);
    assert!(job.unfiltered_records().is_empty());
    assert!(job.records().is_empty());
}

#[test]
fn test_every_declared_filter_owns_a_bucket() {
    let mut filters = FilterSet::new();
    filters.insert("alpha", name_matches("A"));
    filters.insert("omega", name_matches("ZZZ"));
    let mut job = create_job(&["A"], filters);

    job.process().unwrap();
    assert_eq!(job.records().len(), 2);
    assert!(job.partition("omega").is_empty());
}

#[test]
fn test_bucket_order_follows_source_order() {
    let mut filters = FilterSet::new();
    filters.insert("all", |_: &Record| true);
    let mut job = create_job(&["C", "A", "B"], filters);

    job.process().unwrap();
    let names: Vec<&Value> = job
        .partition("all")
        .iter()
        .map(|r| r.get("name").unwrap())
        .collect();
    assert_eq!(
        names,
        vec![&Value::from("C"), &Value::from("A"), &Value::from("B")]
    );
}

#[test]
fn test_process_is_idempotent_across_runs() {
    let mut filters = FilterSet::new();
    filters.insert("alpha", name_matches("A"));
    let mut job = create_job(&["A", "Z"], filters);

    job.process().unwrap();
    let first_total = job.total_records();
    let first_all = job.all_records().to_vec();
    let first_unfiltered = job.unfiltered_records().to_vec();
    let first_alpha = job.partition("alpha").to_vec();

    job.process().unwrap();
    assert_eq!(job.total_records(), first_total);
    assert_eq!(job.all_records(), first_all);
    assert_eq!(job.unfiltered_records(), first_unfiltered);
    assert_eq!(job.partition("alpha"), first_alpha);
}

#[test]
fn test_filters_see_normalized_attribute_names() {
    let mut attributes = AttributeMap::new();
    attributes.insert(AttributeEntry::new("name", "userName"));

    let raw: Record = vec![("userName", Value::from("Arthur"))].into_iter().collect();
    let mut filters = FilterSet::new();
    filters.insert("named", name_matches("Art"));

    let mut job = Job::new(
        Box::new(StubProvider::new("")),
        Box::new(StubReader::new(vec![raw])),
        filters,
        attributes,
    );

    job.process().unwrap();
    assert_eq!(job.partition("named").len(), 1);
    // Output record is keyed by target names only
    let names: Vec<&str> = job.partition("named")[0].field_names().collect();
    assert_eq!(names, vec!["name"]);
}

#[test]
fn test_empty_attribute_map_passes_raw_records_through() {
    let mut job = create_job(&["A"], FilterSet::new());

    job.process().unwrap();
    assert_eq!(job.all_records()[0].get("name"), Some(&Value::from("A")));
}

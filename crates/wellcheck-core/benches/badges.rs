use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wellcheck_core::badges::evaluate;
use wellcheck_core::model::{
    Badge, BadgeRule, BadgeRuleKind, Catalog, CatalogKind, Category, Entry,
};
use wellcheck_core::progress::{BadgeSet, CompletionRecord};

fn make_catalog(category_count: usize, entries_per_category: usize) -> Catalog {
    let categories = (0..category_count)
        .map(|c| Category {
            id: format!("cat{c}"),
            title: format!("Category {c}"),
            description: String::new(),
            badge: Some(Badge {
                id: format!("badge{c}"),
                title: format!("Badge {c}"),
                description: String::new(),
                icon: String::new(),
            }),
            suggestion: None,
            entries: (0..entries_per_category)
                .map(|e| Entry {
                    id: format!("entry{e}"),
                    title: format!("Entry {e}"),
                    reflective_tip: None,
                    bands: vec![],
                    questions: vec![],
                })
                .collect(),
        })
        .collect();

    Catalog {
        kind: CatalogKind::Quiz,
        badges: vec![
            BadgeRule {
                badge: Badge {
                    id: "explorer".into(),
                    title: "Explorer".into(),
                    description: String::new(),
                    icon: String::new(),
                },
                rule: BadgeRuleKind::TotalAtLeast { count: 3 },
            },
            BadgeRule {
                badge: Badge {
                    id: "warrior".into(),
                    title: "Warrior".into(),
                    description: String::new(),
                    icon: String::new(),
                },
                rule: BadgeRuleKind::CatalogComplete,
            },
        ],
        categories,
    }
}

fn half_completed(catalog: &Catalog) -> CompletionRecord {
    let mut record = CompletionRecord::default();
    for (i, (category, entry)) in catalog.iter_entries().enumerate() {
        if i % 2 == 0 {
            record.mark_completed(&category.id, &entry.id);
        }
    }
    record
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for (cats, entries) in [(4, 1), (10, 5), (50, 10)] {
        let catalog = make_catalog(cats, entries);
        let rules = catalog.badge_rules();
        let record = half_completed(&catalog);
        let unlocked = BadgeSet::default();

        group.bench_function(format!("{cats}x{entries}"), |b| {
            b.iter(|| {
                evaluate(
                    black_box(&record),
                    black_box(&unlocked),
                    black_box(&rules),
                    black_box(&catalog),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);

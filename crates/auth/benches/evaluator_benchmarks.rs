use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use campus_auth::{Action, AliasTable, Module, PermissionMatrix, Role};

fn bench_evaluate(c: &mut Criterion) {
    let matrix = PermissionMatrix::standard().expect("standard matrix is valid");

    c.bench_function("evaluate/full_sweep", |b| {
        b.iter(|| {
            let mut granted = 0usize;
            for role in Role::ALL {
                for module in Module::ALL {
                    for action in Action::ALL {
                        granted += matrix.evaluate(black_box(role), black_box(module), black_box(action)) as usize;
                    }
                }
            }
            granted
        })
    });
}

fn bench_visible_modules(c: &mut Criterion) {
    let matrix = PermissionMatrix::standard().expect("standard matrix is valid");
    let mut group = c.benchmark_group("visible_modules");

    for role in Role::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(role), &role, |b, role| {
            b.iter(|| matrix.menu_groups(black_box(*role)))
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let aliases = AliasTable::builtin();

    c.bench_function("resolve_role/known", |b| {
        b.iter(|| aliases.resolve_role(black_box("Quản lý (Admin)")))
    });
    c.bench_function("resolve_role/unknown", |b| {
        b.iter(|| aliases.resolve_role(black_box("Some Unknown Title")))
    });
}

criterion_group!(benches, bench_evaluate, bench_visible_modules, bench_resolve);
criterion_main!(benches);

//! Shared read-only use of a built router.

mod common;
use common::*;

use std::sync::Arc;
use std::thread;

use trie_router::{Method, Router};

#[test]
fn lookups_run_concurrently_on_a_shared_router() {
    let mut router = Router::new();
    router.get("/users/:id", echo("id")).unwrap();
    router.post("/users", named("create")).unwrap();
    let router = Arc::new(router);

    let workers: Vec<_> = (0..8)
        .map(|n| {
            let router = Arc::clone(&router);
            thread::spawn(move || {
                for i in 0..200 {
                    let id = format!("{n}-{i}");
                    assert_eq!(dispatch(&router, Method::Get, &format!("/users/{id}")), id);
                    assert_eq!(dispatch(&router, Method::Post, "/users"), "create");
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }
}

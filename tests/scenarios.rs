//! End-to-end coverage of the six concrete dominance scenarios, run through the public
//! `compute_dominators` entry point rather than the internal GD2 engine directly.

use domgd::{compute_dominators, Config};

#[test]
fn singleton() {
    let dom = compute_dominators(0, &[], &[0], &[0], None, Config::default()).unwrap();
    assert_eq!(dom.as_idom_slice(), &[0]);
}

#[test]
fn chain() {
    let dom = compute_dominators(
        0,
        &[(0, 1), (1, 2), (2, 3), (3, 4)],
        &[0, 0, 1, 2, 3],
        &[4, 3, 2, 1, 0],
        None,
        Config::default(),
    )
    .unwrap();
    assert_eq!(dom.as_idom_slice(), &[0, 0, 1, 2, 3]);
}

#[test]
fn diamond() {
    let dom = compute_dominators(
        0,
        &[(0, 1), (0, 2), (1, 3), (2, 3)],
        &[0, 0, 0, 1],
        &[3, 1, 2, 0],
        None,
        Config::default(),
    )
    .unwrap();
    assert_eq!(dom.as_idom_slice(), &[0, 0, 0, 0]);
}

#[test]
fn loop_back_edge() {
    let dom = compute_dominators(
        0,
        &[(0, 1), (1, 2), (2, 1), (2, 3)],
        &[0, 0, 1, 2],
        &[3, 2, 1, 0],
        None,
        Config::default(),
    )
    .unwrap();
    assert_eq!(dom.as_idom_slice(), &[0, 0, 1, 2]);
}

#[test]
fn shared_join() {
    let dom = compute_dominators(
        0,
        &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5), (3, 5)],
        &[0, 0, 0, 1, 3, 4],
        &[5, 4, 3, 1, 2, 0],
        None,
        Config::default(),
    )
    .unwrap();
    assert_eq!(dom.as_idom_slice(), &[0, 0, 0, 0, 3, 3]);
}

#[test]
fn rejects_a_graph_missing_a_tree_edge() {
    let err = compute_dominators(
        0,
        &[(0, 1), (1, 2)], // (2, 3) missing
        &[0, 0, 1, 2],
        &[3, 2, 1, 0],
        None,
        Config::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err.current_context(),
        domgd::DomError::TreeEdgeMissing(2, 3)
    ));
}

#[test]
fn cross_check_requires_a_preorder() {
    let config = Config {
        cross_check: true,
        require_preorder: true,
    };
    let err = compute_dominators(0, &[(0, 1)], &[0, 0], &[1, 0], None, config).unwrap_err();
    assert!(matches!(err.current_context(), domgd::DomError::MissingPreorder));
}

#[test]
fn cross_check_agrees_on_every_scenario() {
    let cases: Vec<(usize, Vec<(usize, usize)>, Vec<usize>, Vec<usize>, Vec<usize>)> = vec![
        (0, vec![], vec![0], vec![0], vec![0]),
        (
            0,
            vec![(0, 1), (1, 2), (2, 3), (3, 4)],
            vec![0, 0, 1, 2, 3],
            vec![4, 3, 2, 1, 0],
            vec![0, 1, 2, 3, 4],
        ),
        (
            0,
            vec![(0, 1), (0, 2), (1, 3), (2, 3)],
            vec![0, 0, 0, 1],
            vec![3, 1, 2, 0],
            vec![0, 1, 3, 2],
        ),
    ];

    for (root, edges, parents, postorder, preorder) in cases {
        let config = Config {
            cross_check: true,
            require_preorder: true,
        };
        compute_dominators(
            root,
            &edges,
            &parents,
            &postorder,
            Some(&preorder),
            config,
        )
        .expect("GD2 and Semi-NCA must agree");
    }
}

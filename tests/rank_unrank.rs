use borderrank::{
    FastRankerUnranker, RankerUnranker, bordered_count, is_bordered,
    naive::{BorderArrayRankerUnranker, BruteForceRankerUnranker},
    unbordered_count,
    words::Words,
};
use num_bigint::BigUint;

// Walks all words in lexicographic order and checks both insertion ranks of every word and
// the unranking of its own class against the running counters.
fn test_against_enumeration<R: RankerUnranker>(ranker: &R, n: usize, k: usize) {
    let mut next_rank_bordered = 1u32;
    let mut next_rank_unbordered = 1u32;

    for word in Words::new(n, k) {
        let bordered = is_bordered(&word);

        if n > 0 {
            assert_eq!(
                ranker.rank(&word, k, true).unwrap(),
                BigUint::from(next_rank_bordered),
                "bordered rank of {word:?}"
            );
        }
        assert_eq!(
            ranker.rank(&word, k, false).unwrap(),
            BigUint::from(next_rank_unbordered),
            "unbordered rank of {word:?}"
        );

        let own_rank = if bordered {
            next_rank_bordered
        } else {
            next_rank_unbordered
        };
        assert_eq!(
            ranker.unrank(&BigUint::from(own_rank), n, k, bordered).unwrap(),
            word
        );

        if bordered {
            next_rank_bordered += 1;
        } else {
            next_rank_unbordered += 1;
        }
    }

    assert_eq!(bordered_count(n, k), BigUint::from(next_rank_bordered - 1));
    assert_eq!(unbordered_count(n, k), BigUint::from(next_rank_unbordered - 1));
}

#[test]
fn fast_binary() {
    for n in 0..=12 {
        test_against_enumeration(&FastRankerUnranker, n, 2);
    }
}

#[test]
fn fast_larger_alphabets() {
    for n in 0..=7 {
        test_against_enumeration(&FastRankerUnranker, n, 3);
        test_against_enumeration(&FastRankerUnranker, n, 4);
    }

    test_against_enumeration(&FastRankerUnranker, 4, 7);
}

#[test]
fn fast_unary() {
    for n in 0..=6 {
        test_against_enumeration(&FastRankerUnranker, n, 1);
    }
}

#[test]
fn border_array_baseline() {
    test_against_enumeration(&BorderArrayRankerUnranker, 12, 2);
    test_against_enumeration(&BorderArrayRankerUnranker, 6, 3);
}

#[test]
fn brute_force_oracle() {
    test_against_enumeration(&BruteForceRankerUnranker, 8, 2);
    test_against_enumeration(&BruteForceRankerUnranker, 4, 3);
}

#[test]
fn implementations_agree() {
    let implementations: [&dyn RankerUnranker; 3] = [
        &FastRankerUnranker,
        &BorderArrayRankerUnranker,
        &BruteForceRankerUnranker,
    ];

    for (n, k) in [(9, 2), (5, 3), (4, 4)] {
        for word in Words::new(n, k) {
            for bordered in [false, true] {
                let ranks: Vec<_> = implementations
                    .iter()
                    .map(|ranker| ranker.rank(&word, k, bordered).unwrap())
                    .collect();

                assert!(ranks.windows(2).all(|pair| pair[0] == pair[1]), "{word:?}");
            }
        }
    }
}

#[test]
fn binary_words_of_length_three() {
    let unbordered = [[1, 1, 2], [1, 2, 2], [2, 1, 1], [2, 2, 1]];
    let bordered = [[1, 1, 1], [1, 2, 1], [2, 1, 2], [2, 2, 2]];

    for (rank, word) in (1u32..).zip(unbordered) {
        assert!(!is_bordered(&word));
        assert_eq!(borderrank::rank(&word, 2, false).unwrap(), BigUint::from(rank));
        assert_eq!(borderrank::unrank(&BigUint::from(rank), 3, 2, false).unwrap(), word);
    }

    for (rank, word) in (1u32..).zip(bordered) {
        assert!(is_bordered(&word));
        assert_eq!(borderrank::rank(&word, 2, true).unwrap(), BigUint::from(rank));
        assert_eq!(borderrank::unrank(&BigUint::from(rank), 3, 2, true).unwrap(), word);
    }
}

#[test]
fn empty_word() {
    let empty: Vec<usize> = Vec::new();

    assert_eq!(
        borderrank::unrank(&BigUint::from(1u32), 0, 5, false).unwrap(),
        empty
    );
    assert_eq!(borderrank::rank(&empty, 5, false).unwrap(), BigUint::from(1u32));
    assert!(borderrank::rank(&empty, 5, true).is_err());
    assert!(borderrank::unrank(&BigUint::from(1u32), 0, 5, true).is_err());
}

#[test]
fn classes_partition_the_word_space() {
    for (n, k) in [(0, 2), (1, 1), (10, 2), (30, 3), (64, 26)] {
        assert_eq!(
            bordered_count(n, k) + unbordered_count(n, k),
            BigUint::from(k).pow(n as u32)
        );
    }
}

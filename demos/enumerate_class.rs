use borderrank::{bordered_count, unbordered_count, unrank};
use num_bigint::BigUint;

fn main() {
    // This example lists all bordered and unbordered binary words of length 5 by unranking every
    // rank of the two classes.

    let length = 5;
    let alphabet_size = 2;

    for bordered in [false, true] {
        let count = if bordered {
            bordered_count(length, alphabet_size)
        } else {
            unbordered_count(length, alphabet_size)
        };

        let label = if bordered { "bordered" } else { "unbordered" };
        println!("{count} {label} words of length {length}:");

        let mut rank = BigUint::from(1u32);
        while rank <= count {
            let word = unrank(&rank, length, alphabet_size, bordered).unwrap();
            println!("{rank:>3}: {word:?}");
            rank += 1u32;
        }
    }

    assert_eq!(
        bordered_count(length, alphabet_size) + unbordered_count(length, alphabet_size),
        BigUint::from(32u32)
    );
}

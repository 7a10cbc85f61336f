use algobench::{control, dslist, primes, sort, strops};

#[quickcheck]
fn quicksort_matches_std(xs: Vec<i64>) -> bool {
    let mut sorted = xs.clone();
    sort::sort_list(&mut sorted);
    let mut expected = xs;
    expected.sort_unstable();

    sorted == expected
}

#[quickcheck]
fn bubble_sort_matches_quicksort(xs: Vec<i64>) -> bool {
    let mut sorted = xs.clone();
    sort::sort_list(&mut sorted);

    sort::bubble_sort(&xs) == sorted && dslist::sort_list(&xs) == sorted
}

#[quickcheck]
fn dutch_flag_groups(xs: Vec<i8>, pivot: i8) -> bool {
    let mut v: Vec<i64> = xs.into_iter().map(i64::from).collect();
    let pivot = i64::from(pivot);
    let mut expected = v.clone();
    sort::dutch_flag_partition(&mut v, pivot);

    // Same elements, and once past the smaller ones we never go back.
    let mut seen = v.clone();
    seen.sort_unstable();
    expected.sort_unstable();
    let groups: Vec<_> = v.iter().map(|x| x.cmp(&pivot)).collect();

    seen == expected && groups.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn max_n_is_top_of_sorted(xs: Vec<i64>, n: usize) -> bool {
    let n = n % (xs.len() + 1);
    let mut sorted = xs.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    sort::max_n(&xs, n) == Ok(sorted[..n].to_vec())
}

#[quickcheck]
fn factors_multiply_back(n: u16) -> bool {
    let n = u64::from(n);
    let factors = primes::prime_factors(n);

    factors == primes::prime_factors_naive(n)
        && factors.iter().all(|&f| primes::is_prime(f))
        && factors.windows(2).all(|w| w[0] <= w[1])
        && (n < 2 || factors.iter().product::<u64>() == n)
}

#[quickcheck]
fn rotate_then_back(xs: Vec<i64>, n: usize) -> bool {
    let n = n % (xs.len() + 1);
    let rotated = dslist::rotate_list(&xs, n).unwrap();
    let back = dslist::rotate_list(&rotated, xs.len() - n).unwrap();

    back == xs
}

#[quickcheck]
fn reverse_twice(xs: Vec<i64>) -> bool {
    dslist::reverse_list(&dslist::reverse_list(&xs)) == xs
}

#[quickcheck]
fn merge_keeps_both(a: Vec<i64>, b: Vec<i64>) -> bool {
    let merged = dslist::merge_lists(&a, &b);

    merged.len() == a.len() + b.len() && merged[..a.len()] == a[..] && merged[a.len()..] == b[..]
}

#[quickcheck]
fn count_duplicates_strategies_agree(a: Vec<i8>, b: Vec<i8>) -> bool {
    let a: Vec<i64> = a.into_iter().map(i64::from).collect();
    let b: Vec<i64> = b.into_iter().map(i64::from).collect();

    control::count_duplicates(&a, &b) == control::count_duplicates_naive(&a, &b)
}

#[quickcheck]
fn sum_range_strategies_agree(n: u16) -> bool {
    let n = i64::from(n);

    control::sum_range(n) == Ok(control::sum_range_naive(n + 1))
}

#[quickcheck]
fn str_reverse_strategies_agree(s: String) -> bool {
    let reversed = strops::str_reverse(&s);

    reversed == strops::str_reverse_naive(&s) && strops::palindrome(&s) == (reversed == s)
}

#[quickcheck]
fn sum_range_matches_wide_formula(n: u32) -> bool {
    let wide = i128::from(n) * (i128::from(n) + 1) / 2;

    control::sum_range(i64::from(n)).map(i128::from) == Ok(wide)
}

#[quickcheck]
fn sum_square_matches_loop(n: u16) -> bool {
    let n = u64::from(n);

    control::sum_square(n) == Ok((0..n).map(|i| i * i).sum::<u64>())
}

const UNITS: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const HUNDRED: u64 = 100;
const THOUSAND: u64 = 1_000;
const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

/// Spells `n` in South Asian numbering (crore, lakh, thousand, hundred).
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        "Zero".to_string()
    } else {
        in_words(n)
    }
}

fn with_rest(head: String, unit: &str, rest: u64) -> String {
    if rest == 0 {
        format!("{} {}", head, unit)
    } else {
        format!("{} {} {}", head, unit, in_words(rest))
    }
}

fn in_words(n: u64) -> String {
    match n {
        0..=19 => UNITS[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                unit => format!("{} {}", tens, UNITS[unit as usize]),
            }
        }
        100..=999 => with_rest(UNITS[(n / HUNDRED) as usize].to_string(), "Hundred", n % HUNDRED),
        1_000..=99_999 => with_rest(in_words(n / THOUSAND), "Thousand", n % THOUSAND),
        100_000..=9_999_999 => with_rest(in_words(n / LAKH), "Lakh", n % LAKH),
        _ => with_rest(in_words(n / CRORE), "Crore", n % CRORE),
    }
}

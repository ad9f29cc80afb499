//! Fixed initial roster

use crate::models::Member;

/// Number of members in the seed dataset
pub const SEED_SIZE: usize = 5;

/// The seed dataset, in display order
pub fn seed_members() -> Vec<Member> {
    vec![
        Member::new("Hong Gildong", 20)
            .with_phone("010-1111-2222")
            .with_address("Seoul"),
        Member::new("Im Kkeokjeong", 23)
            .with_phone("010-2222-3333")
            .with_address("Seoul"),
        Member::new("Steve Jobs", 50)
            .with_phone("010-1234-1234")
            .with_address("Cupertino"),
        Member::new("Tim Cook", 60)
            .with_phone("010-7777-7777")
            .with_address("California"),
        Member::new("Jeff Bezos", 55)
            .with_phone("010-2222-7777")
            .with_address("Seattle"),
    ]
}

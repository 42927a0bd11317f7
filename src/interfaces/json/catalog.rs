use crate::domain::coupon::CouponBook;
use crate::domain::inventory::PriceList;
use crate::error::Result;
use std::collections::BTreeMap;
use std::io::Read;

/// Loads unit prices from a JSON object of `{"SKU": cents}`.
pub fn read_prices<R: Read>(source: R) -> Result<PriceList> {
    Ok(serde_json::from_reader(source)?)
}

/// Extends `book` with the codes in a JSON object of `{"CODE": percent_off}`.
///
/// Codes already in the book are replaced.
pub fn read_coupons<R: Read>(source: R, book: CouponBook) -> Result<CouponBook> {
    let codes: BTreeMap<String, u8> = serde_json::from_reader(source)?;
    codes
        .into_iter()
        .try_fold(book, |book, (code, percent_off)| {
            book.with_percent_off(&code, percent_off)
        })
}

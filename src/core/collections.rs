use crate::domain::model::{Product, RatedItem};

/// Lowest rating kept by [`filter_by_rating`].
pub const MIN_RATING: f64 = 4.0;

/// Keeps the items rated [`MIN_RATING`] or higher, in their original order.
pub fn filter_by_rating(items: &[RatedItem]) -> Vec<RatedItem> {
    items
        .iter()
        .filter(|item| item.rating >= MIN_RATING)
        .cloned()
        .collect()
}

/// Flattens one level: every element of every array, in argument order.
pub fn concatenate_arrays<I, T>(arrays: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    arrays.into_iter().flatten().collect()
}

/// Highest-priced product, or `None` for an empty slice. Ties keep the first one seen.
pub fn most_expensive_product(products: &[Product]) -> Option<Product> {
    let mut iter = products.iter();
    let mut best = iter.next()?;
    for product in iter {
        // 嚴格大於：同價時保留先出現的
        if product.price > best.price {
            best = product;
        }
    }
    Some(best.clone())
}

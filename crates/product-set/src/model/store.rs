entity_id!(
    /// Identifier of a storefront a set is sold in.
    StoreId,
    "store"
);

/// Copy `existing` (if any) and append `element` at the end.
pub fn append_element<T: Clone>(existing: Option<&[T]>, element: T) -> Vec<T> {
    let mut out = Vec::with_capacity(existing.map_or(0, <[T]>::len) + 1);
    if let Some(items) = existing {
        out.extend_from_slice(items);
    }
    out.push(element);
    out
}

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// One declared field of a record type: display name plus a typed getter.
///
/// Normally produced by the [`table_record!`](crate::table_record) macro in
/// declaration order; the name doubles as the table column header.
pub struct Field<T> {
    pub name: &'static str,
    pub get: fn(&T) -> Option<String>,
}

/// A type whose values can be rendered as table rows.
///
/// `FIELDS` lists the public fields in declaration order. The order must be
/// identical on every read, which the compiler guarantees for a `const` -
/// header cells and row cells align positionally on it.
pub trait Record: Sized + 'static {
    const FIELDS: &'static [Field<Self>];
}

/// Conversion from a field value to display text.
///
/// `None` is the absent marker: the cell renders as an empty string.
pub trait CellValue {
    fn cell_text(&self) -> Option<String>;
}

macro_rules! cell_value_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl CellValue for $ty {
                fn cell_text(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )+
    };
}

cell_value_via_display!(
    String,
    &'static str,
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
);

impl CellValue for chrono::DateTime<chrono::Utc> {
    fn cell_text(&self) -> Option<String> {
        Some(self.to_rfc3339())
    }
}

impl<T: CellValue> CellValue for Option<T> {
    fn cell_text(&self) -> Option<String> {
        self.as_ref().and_then(CellValue::cell_text)
    }
}

/// Implements [`Record`] for a struct by listing its fields in declaration
/// order. Field types must implement [`CellValue`].
///
/// ```
/// use cardkit_engine::table_record;
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// table_record!(User { name, age });
/// ```
#[macro_export]
macro_rules! table_record {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::fields::Record for $ty {
            const FIELDS: &'static [$crate::fields::Field<Self>] = &[
                $(
                    $crate::fields::Field {
                        name: stringify!($field),
                        get: |record| $crate::fields::CellValue::cell_text(&record.$field),
                    }
                ),+
            ];
        }
    };
}

/// A compiled accessor for one field: display name plus a reusable,
/// type-erased getter built once per record type.
pub struct FieldDescriptor {
    name: &'static str,
    accessor: Box<dyn Fn(&dyn Any) -> Option<String> + Send + Sync>,
}

impl FieldDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reads the field from `record`, which must be the type the descriptor
    /// was compiled for. A mismatched type yields the absent marker - the
    /// cell renders empty rather than failing the build.
    pub fn value(&self, record: &dyn Any) -> Option<String> {
        (self.accessor)(record)
    }
}

/// The cached field metadata for one record type, descriptors in declaration
/// order.
pub struct TableSchema {
    fields: Vec<FieldDescriptor>,
}

impl TableSchema {
    fn compile<T: Record>() -> Self {
        let fields = T::FIELDS
            .iter()
            .map(|field| {
                let get = field.get;
                FieldDescriptor {
                    name: field.name,
                    accessor: Box::new(move |record: &dyn Any| {
                        record.downcast_ref::<T>().and_then(get)
                    }),
                }
            })
            .collect();

        Self { fields }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

/// Per-type schema cache keyed by `TypeId`.
///
/// The first `schema_of::<T>()` call compiles the type's descriptors and
/// stores them; later calls return the stored `Arc` without recompiling.
/// Concurrent first calls for the same type may compile redundantly, but the
/// entry API keeps exactly one result, so every caller observes the same
/// descriptor sequence. Compilation is deterministic (it walks
/// `Record::FIELDS`), so even racing callers never see divergent orders.
///
/// A cache hit costs one brief read-lock acquisition; callers hold the
/// returned `Arc` and iterate rows without touching the lock again. Entries
/// are never evicted - the set of record types a host renders is small and
/// fixed at compile time.
#[derive(Default)]
pub struct FieldCache {
    schemas: RwLock<HashMap<TypeId, Arc<TableSchema>>>,
}

impl FieldCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema_of<T: Record>(&self) -> Arc<TableSchema> {
        let key = TypeId::of::<T>();

        {
            let schemas = self.schemas.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(schema) = schemas.get(&key) {
                return schema.clone();
            }
        }

        // Compile outside the write lock; a racing loser drops its copy.
        let compiled = Arc::new(TableSchema::compile::<T>());

        let mut schemas = self.schemas.write().unwrap_or_else(PoisonError::into_inner);
        schemas.entry(key).or_insert(compiled).clone()
    }
}

//! Instance identity assertions for shared and cloned values

use std::any::type_name;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::probe::short_type_name;

fn type_label<T: ?Sized>() -> String {
    short_type_name(type_name::<T>())
}

/// Fails unless two calls to `accessor` hand out the same allocation
pub fn assert_singleton<T, F>(accessor: F) -> Result<()>
where
    T: ?Sized,
    F: Fn() -> Arc<T>,
{
    let first = accessor();
    let second = accessor();
    if !Arc::ptr_eq(&first, &second) {
        return Err(Error::assertion(format!(
            "The type {} is not a singleton.",
            type_label::<T>()
        )));
    }
    Ok(())
}

/// Fails unless `Clone` produces an equal but distinct instance
pub fn assert_prototype<T: Clone + PartialEq>(original: &T) -> Result<()> {
    assert_prototype_with(original, T::clone)
}

/// Like [`assert_prototype`] with a custom copy function
pub fn assert_prototype_with<T, F>(original: &T, copy: F) -> Result<()>
where
    T: PartialEq,
    F: FnOnce(&T) -> T,
{
    let copied = copy(original);
    if copied != *original || std::ptr::eq(&copied, original) {
        return Err(Error::assertion(format!(
            "The type {} is not a prototype.",
            type_label::<T>()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    #[derive(Debug, PartialEq)]
    struct Registry {
        name: String,
    }

    fn shared_registry() -> Arc<Registry> {
        static INSTANCE: OnceLock<Arc<Registry>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| {
                Arc::new(Registry {
                    name: "shared".to_string(),
                })
            })
            .clone()
    }

    fn fresh_registry() -> Arc<Registry> {
        Arc::new(Registry {
            name: "fresh".to_string(),
        })
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Shape {
        sides: u32,
    }

    #[test]
    fn test_shared_instance_is_singleton() {
        assert!(assert_singleton(shared_registry).is_ok());
        assert_eq!(shared_registry().name, "shared");
    }

    #[test]
    fn test_fresh_instances_are_not_singleton() {
        let err = assert_singleton(fresh_registry).unwrap_err();
        assert_eq!(err.to_string(), "The type Registry is not a singleton.");
    }

    #[test]
    fn test_clone_is_prototype() {
        assert!(assert_prototype(&Shape { sides: 4 }).is_ok());
    }

    #[test]
    fn test_lossy_copy_is_not_prototype() {
        let err = assert_prototype_with(&Shape { sides: 4 }, |_| Shape { sides: 3 }).unwrap_err();
        assert_eq!(err.to_string(), "The type Shape is not a prototype.");
    }
}

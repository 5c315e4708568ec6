use crate::error::{Result, UsuariosError};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

type AnyArc = Arc<dyn Any + Send + Sync>;

/// Casts a registered implementation into an `Arc<dyn Trait>`, boxed back into `dyn Any`.
/// Returns `None` when the instance is not of the bound implementation type.
type CasterFn = Arc<dyn Fn(AnyArc) -> Option<AnyArc> + Send + Sync>;

/// Thread-safe, type-keyed service registry.
///
/// Concrete services are stored by `TypeId`; trait objects are resolved through
/// a binding to a registered implementation.
#[derive(Clone, Default)]
pub struct Container {
    services: DashMap<TypeId, AnyArc>,
    trait_mappings: DashMap<TypeId, TypeId>,
    casters: DashMap<TypeId, CasterFn>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.services.insert(TypeId::of::<T>(), Arc::new(instance));
        self
    }

    /// Bind `Trait` to the registered `Impl`.
    ///
    /// The implementation may be registered before or after the binding.
    pub fn register_trait<Trait, Impl, F>(&mut self, caster_fn: F) -> &mut Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        let trait_id = TypeId::of::<Trait>();
        self.trait_mappings.insert(trait_id, TypeId::of::<Impl>());

        let caster: CasterFn = Arc::new(move |instance: AnyArc| {
            let concrete = instance.downcast::<Impl>().ok()?;
            let trait_obj: Arc<Trait> = caster_fn(concrete);
            Some(Arc::new(trait_obj) as AnyArc)
        });
        self.casters.insert(trait_id, caster);
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let instance = self
            .services
            .get(&TypeId::of::<T>())
            .map(|entry| entry.value().clone())
            .ok_or_else(|| UsuariosError::DependencyNotFound {
                type_name: std::any::type_name::<T>().to_string(),
            })?;

        instance
            .downcast::<T>()
            .map_err(|_| UsuariosError::DowncastFailed {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let trait_id = TypeId::of::<T>();
        let not_found = |detail: &str| UsuariosError::DependencyNotFound {
            type_name: format!("{} ({detail})", std::any::type_name::<T>()),
        };

        let impl_id = *self
            .trait_mappings
            .get(&trait_id)
            .ok_or_else(|| not_found("no binding"))?;
        let caster = self
            .casters
            .get(&trait_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| not_found("no binding"))?;
        let instance = self
            .services
            .get(&impl_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| not_found("implementation not registered"))?;

        let downcast_failed = || UsuariosError::DowncastFailed {
            type_name: std::any::type_name::<T>().to_string(),
        };

        // The caster hands back an Arc<dyn Any> wrapping an Arc<T>.
        let wrapper = (caster.as_ref())(instance)
            .ok_or_else(downcast_failed)?
            .downcast::<Arc<T>>()
            .map_err(|_| downcast_failed())?;
        Ok(wrapper.as_ref().clone())
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.services.contains_key(&type_id) || self.trait_mappings.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

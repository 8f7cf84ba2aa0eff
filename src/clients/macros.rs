/// Generates `new` and a traced `get_<entity>` lookup for a client wrapping
/// a `ResourceClient`.
macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }

        paste::paste! {
            #[allow(dead_code)]
            impl $client_name {
                #[tracing::instrument(skip_all)]
                pub async fn [<get_ $entity_name_snake>](&self, id: String) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await
                }
            }
        }
    };
}

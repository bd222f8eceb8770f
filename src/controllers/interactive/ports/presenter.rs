use crate::controllers::interactive::events::render::RenderEvent;

pub trait RenderPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}

#[cfg(feature = "runtime-tokio")]
pub mod tokio {
    use futures::Future;

    use crate::{pair, Endpoint, Shape};

    pub fn create<S, R, F, Fut>(party: F) -> Endpoint<S, R>
    where
        S: Shape,
        R: Shape,
        F: FnOnce(Endpoint<R, S>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (mine, theirs) = pair();
        drop(tokio::spawn(party(theirs)));
        mine
    }
}

pub mod spawn {
    use futures::{task::SpawnExt, Future};

    use crate::{pair, Endpoint, Shape};

    pub trait Create {
        fn create<S, R, F, Fut>(&self, party: F) -> Endpoint<S, R>
        where
            S: Shape,
            R: Shape,
            F: FnOnce(Endpoint<R, S>) -> Fut,
            Fut: Future<Output = ()> + Send + 'static;
    }

    impl<Sp: futures::task::Spawn> Create for Sp {
        fn create<S, R, F, Fut>(&self, party: F) -> Endpoint<S, R>
        where
            S: Shape,
            R: Shape,
            F: FnOnce(Endpoint<R, S>) -> Fut,
            Fut: Future<Output = ()> + Send + 'static,
        {
            let (mine, theirs) = pair();
            self.spawn(party(theirs)).ok().expect("spawn failed");
            mine
        }
    }
}

pub mod local_spawn {
    use futures::{task::LocalSpawnExt, Future};

    use crate::{pair, Endpoint, Shape};

    pub trait Create {
        fn create<S, R, F, Fut>(&self, party: F) -> Endpoint<S, R>
        where
            S: Shape,
            R: Shape,
            F: FnOnce(Endpoint<R, S>) -> Fut,
            Fut: Future<Output = ()> + 'static;
    }

    impl<Sp: futures::task::LocalSpawn> Create for Sp {
        fn create<S, R, F, Fut>(&self, party: F) -> Endpoint<S, R>
        where
            S: Shape,
            R: Shape,
            F: FnOnce(Endpoint<R, S>) -> Fut,
            Fut: Future<Output = ()> + 'static,
        {
            let (mine, theirs) = pair();
            self.spawn_local(party(theirs)).ok().expect("spawn failed");
            mine
        }
    }
}

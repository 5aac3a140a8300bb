//! Index Service
//!
//! Assembles the site's home page from the catalog, Auth, notification and
//! booking services.
//!
//! Personalised data (popular categories, user info, subscriptions) is
//! best-effort: a failure is logged and the page renders without it. The
//! interview listing and its profiles are required; their failures propagate.

use std::sync::Arc;

use crate::application::dto::{Breadcrumb, IndexPage, InterviewDto};
use crate::application::gateways::{AuthGateway, CatalogGateway, InterviewGateway, NotificationGateway};
use crate::application::services::ProfilesService;
use crate::config::InterviewPageSettings;
use crate::domain::InterviewStatus;
use crate::shared::error::AppError;
use crate::shared::pagination::{PageRequest, SortDirection};

/// Home page aggregation
#[derive(Clone)]
pub struct IndexService {
    catalog: Arc<dyn CatalogGateway>,
    auth: Arc<dyn AuthGateway>,
    notifications: Arc<dyn NotificationGateway>,
    interviews: Arc<dyn InterviewGateway>,
    profiles: ProfilesService,
    interview_page: InterviewPageSettings,
}

impl IndexService {
    pub fn new(
        catalog: Arc<dyn CatalogGateway>,
        auth: Arc<dyn AuthGateway>,
        notifications: Arc<dyn NotificationGateway>,
        interviews: Arc<dyn InterviewGateway>,
        interview_page: InterviewPageSettings,
    ) -> Self {
        Self {
            profiles: ProfilesService::new(auth.clone()),
            catalog,
            auth,
            notifications,
            interviews,
            interview_page,
        }
    }

    /// Build the home page for an optional session token.
    pub async fn index_page(&self, token: Option<&str>) -> Result<IndexPage, AppError> {
        let mut page = IndexPage {
            breadcrumbs: vec![Breadcrumb {
                name: "Home".into(),
                url: "/".into(),
            }],
            categories: Vec::new(),
            user_info: None,
            subscriptions: None,
            can_manage: false,
            new_interviews: Vec::new(),
            users: Vec::new(),
        };

        let (personal, interviews) = futures::join!(
            self.fill_personal_context(&mut page, token),
            self.new_interviews()
        );

        if let Err(e) = personal {
            tracing::error!(error = %e, "Remote application not responding, rendering without personal data");
        }

        let interviews = interviews?;
        page.users = self.profiles.get_all_profiles_by_id(&interviews).await?;
        page.new_interviews = interviews;

        Ok(page)
    }

    /// Fields are written as soon as they arrive so a later failure keeps earlier data.
    async fn fill_personal_context(&self, page: &mut IndexPage, token: Option<&str>) -> Result<(), AppError> {
        page.categories = self.catalog.most_popular_categories().await?;

        if let Some(token) = token {
            let user = self.auth.user_info(token).await?;
            let user_id = user.id;
            let can_manage = user.can_manage();
            page.user_info = Some(user);
            page.subscriptions = Some(self.notifications.subscriptions(user_id).await?);
            page.can_manage = can_manage;
        }

        Ok(())
    }

    async fn new_interviews(&self) -> Result<Vec<InterviewDto>, AppError> {
        let request = PageRequest::of(self.interview_page.page, self.interview_page.size)
            .sorted(SortDirection::Desc);
        let page = self
            .interviews
            .interviews_by_status(InterviewStatus::New.id(), request)
            .await?;
        Ok(page.into_content())
    }
}
